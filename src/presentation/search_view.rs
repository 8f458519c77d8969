use std::collections::HashMap;

use iced::widget::{button, column, container, responsive, row, scrollable, text, text_input};
use iced::{Alignment, Element, Length};

use crate::core::models::{
    CardImage, RequestTicket, ResultCardStyle, ResultImage, SearchError, SearchResult,
};
use crate::presentation::app_theme;
use crate::presentation::result_card;

pub struct SearchView {
    query: String,
    results: Vec<SearchResult>,
    loading: bool,
    error_message: Option<String>,
    images: HashMap<String, CardImage>,
    latest_ticket: RequestTicket,
    results_ticket: RequestTicket,
    card_style: ResultCardStyle,
}

#[derive(Debug, Clone)]
pub enum SearchViewMessage {
    QueryChanged(String),
    Submit,
    SearchCompleted(RequestTicket, Result<Vec<SearchResult>, SearchError>),
    ImageLoaded(RequestTicket, String, Result<ResultImage, String>),
    OpenImage(String),
}

/// Side effects the owner of the view has to carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchViewAction {
    None,
    Search {
        ticket: RequestTicket,
        query: String,
    },
    LoadImages {
        ticket: RequestTicket,
        images: Vec<(String, String)>,
    },
    OpenImage(String),
}

impl SearchView {
    pub fn build(card_style: ResultCardStyle) -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            loading: false,
            error_message: None,
            images: HashMap::new(),
            latest_ticket: RequestTicket::default(),
            results_ticket: RequestTicket::default(),
            card_style,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn card_image(&self, identifier: &str) -> Option<&CardImage> {
        self.images.get(identifier)
    }

    pub fn card_style(&self) -> ResultCardStyle {
        self.card_style
    }

    pub fn set_card_style(&mut self, card_style: ResultCardStyle) {
        self.card_style = card_style;
    }

    fn has_submittable_query(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && self.has_submittable_query()
    }

    pub fn update(&mut self, message: SearchViewMessage) -> SearchViewAction {
        match message {
            SearchViewMessage::QueryChanged(query) => {
                self.query = query;
                SearchViewAction::None
            }
            SearchViewMessage::Submit => self.handle_submit(),
            SearchViewMessage::SearchCompleted(ticket, outcome) => {
                self.handle_search_completed(ticket, outcome)
            }
            SearchViewMessage::ImageLoaded(ticket, identifier, outcome) => {
                self.handle_image_loaded(ticket, identifier, outcome);
                SearchViewAction::None
            }
            SearchViewMessage::OpenImage(identifier) => self
                .results
                .iter()
                .find(|result| result.identifier == identifier)
                .map(|result| SearchViewAction::OpenImage(result.image_location.clone()))
                .unwrap_or(SearchViewAction::None),
        }
    }

    fn handle_submit(&mut self) -> SearchViewAction {
        if !self.has_submittable_query() {
            log::debug!("[SEARCH_VIEW] Ignoring submit of blank query");
            return SearchViewAction::None;
        }

        let ticket = self.latest_ticket.next();
        self.latest_ticket = ticket;
        self.loading = true;
        self.error_message = None;

        log::info!(
            "[SEARCH_VIEW] Submitting query {:?} as request #{}",
            self.query,
            ticket.value()
        );

        SearchViewAction::Search {
            ticket,
            query: self.query.clone(),
        }
    }

    fn handle_search_completed(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<Vec<SearchResult>, SearchError>,
    ) -> SearchViewAction {
        if ticket != self.latest_ticket {
            log::debug!(
                "[SEARCH_VIEW] Discarding stale response #{} (latest is #{})",
                ticket.value(),
                self.latest_ticket.value()
            );
            return SearchViewAction::None;
        }

        self.loading = false;

        match outcome {
            Ok(results) => {
                log::info!(
                    "[SEARCH_VIEW] Request #{} returned {} results",
                    ticket.value(),
                    results.len()
                );

                self.images = results
                    .iter()
                    .map(|result| (result.identifier.clone(), CardImage::Loading))
                    .collect();
                let pending_images: Vec<(String, String)> = results
                    .iter()
                    .map(|result| (result.identifier.clone(), result.image_location.clone()))
                    .collect();

                self.results = results;
                self.results_ticket = ticket;

                if pending_images.is_empty() {
                    SearchViewAction::None
                } else {
                    SearchViewAction::LoadImages {
                        ticket,
                        images: pending_images,
                    }
                }
            }
            Err(error) => {
                log::error!("[SEARCH_VIEW] Request #{} failed: {}", ticket.value(), error);
                self.error_message = Some(error.user_message());
                SearchViewAction::None
            }
        }
    }

    fn handle_image_loaded(
        &mut self,
        ticket: RequestTicket,
        identifier: String,
        outcome: Result<ResultImage, String>,
    ) {
        if ticket != self.results_ticket {
            return;
        }

        let Some(slot) = self.images.get_mut(&identifier) else {
            return;
        };

        *slot = match outcome {
            Ok(image) => CardImage::Loaded(image),
            Err(error) => {
                log::warn!("[SEARCH_VIEW] Image for {} failed to load: {}", identifier, error);
                CardImage::Failed
            }
        };
    }

    pub fn render_ui(&self) -> Element<'_, SearchViewMessage> {
        let query_input = text_input("Enter search query", &self.query)
            .on_input(SearchViewMessage::QueryChanged)
            .on_submit_maybe(
                self.has_submittable_query()
                    .then_some(SearchViewMessage::Submit),
            )
            .padding(12)
            .size(16)
            .width(Length::Fill);

        let search_btn = button(text("Search").size(16))
            .padding([12, 24])
            .style(app_theme::primary_button_style)
            .on_press_maybe(self.can_submit().then_some(SearchViewMessage::Submit));

        let form = row![query_input, search_btn]
            .spacing(8)
            .align_y(Alignment::Center);

        let mut content = column![form].spacing(12).width(Length::Fill);

        if self.loading {
            content = content.push(text("Loading...").size(14));
        }

        if let Some(error) = &self.error_message {
            content = content.push(text(error).size(14).style(app_theme::error_text));
        }

        let grid = responsive(move |size| self.render_grid(size.width));

        content.push(grid).into()
    }

    fn render_grid(&self, available_width: f32) -> Element<'_, SearchViewMessage> {
        let columns = result_card::grid_columns_for_width(available_width);

        scrollable(
            container(result_card::render_results_grid(
                &self.results,
                &self.images,
                self.card_style,
                columns,
            ))
            .padding([0, 12]),
        )
        .height(Length::Fill)
        .into()
    }
}
