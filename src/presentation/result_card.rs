use std::collections::HashMap;

use iced::widget::{column, container, image, mouse_area, text, Column, Row, Space};
use iced::{ContentFit, Element, Length};

use crate::core::models::{CardImage, ResultCardStyle, SearchResult};
use crate::global_constants;
use crate::presentation::app_theme;
use crate::presentation::search_view::SearchViewMessage;

pub fn grid_columns_for_width(width: f32) -> usize {
    if width >= global_constants::GRID_THREE_COLUMN_MIN_WIDTH {
        3
    } else if width >= global_constants::GRID_TWO_COLUMN_MIN_WIDTH {
        2
    } else {
        1
    }
}

pub fn render_results_grid<'a>(
    results: &'a [SearchResult],
    images: &'a HashMap<String, CardImage>,
    card_style: ResultCardStyle,
    columns: usize,
) -> Element<'a, SearchViewMessage> {
    let columns = columns.max(1);

    let rows: Vec<Element<'a, SearchViewMessage>> = results
        .chunks(columns)
        .map(|chunk| {
            let mut cells: Vec<Element<'a, SearchViewMessage>> = chunk
                .iter()
                .map(|result| {
                    render_result_card(result, images.get(&result.identifier), card_style)
                })
                .collect();

            for _ in chunk.len()..columns {
                cells.push(Space::new().width(Length::Fill).into());
            }

            Row::from_vec(cells).spacing(16).into()
        })
        .collect();

    Column::from_vec(rows).spacing(16).width(Length::Fill).into()
}

pub fn render_result_card<'a>(
    result: &'a SearchResult,
    card_image: Option<&'a CardImage>,
    card_style: ResultCardStyle,
) -> Element<'a, SearchViewMessage> {
    let image_slot = mouse_area(render_image_slot(card_image, card_style))
        .on_press(SearchViewMessage::OpenImage(result.identifier.clone()));

    let distance_line = text(format!("Distance: {}", result.formatted_distance()))
        .size(13)
        .style(app_theme::muted_text);

    container(
        column![image_slot, text(&result.description).size(15), distance_line].spacing(8),
    )
    .padding(16)
    .width(Length::Fill)
    .style(app_theme::card_style(card_style))
    .into()
}

fn render_image_slot<'a>(
    card_image: Option<&'a CardImage>,
    card_style: ResultCardStyle,
) -> Element<'a, SearchViewMessage> {
    let height = Length::Fixed(global_constants::RESULT_IMAGE_HEIGHT);

    match card_image {
        Some(CardImage::Loaded(loaded)) => image(loaded.image_handle.clone())
            .width(Length::Fill)
            .height(height)
            .content_fit(ContentFit::Cover)
            .into(),
        Some(CardImage::Failed) if card_style.shows_image_placeholder() => {
            placeholder("Image unavailable", height)
        }
        Some(CardImage::Failed) => Space::new().width(Length::Fill).height(height).into(),
        Some(CardImage::Loading) | None => placeholder("Loading image...", height),
    }
}

fn placeholder<'a>(label: &'a str, height: Length) -> Element<'a, SearchViewMessage> {
    container(text(label).size(12))
        .width(Length::Fill)
        .height(height)
        .center_x(Length::Fill)
        .center_y(height)
        .style(app_theme::image_placeholder_style)
        .into()
}
