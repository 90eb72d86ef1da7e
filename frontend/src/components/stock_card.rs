use leptos::*;

use crate::snapshot::{
    format::tone_class,
    view::{CardView, LabeledValue},
};

#[component]
pub fn CardGrid(cards: Vec<CardView>) -> impl IntoView {
    view! {
        <div class="grid">
            <For
                each=move || cards.clone()
                key=|card| card.key()
                children=move |card: CardView| view! { <StockCard card=card /> }
            />
        </div>
    }
}

#[component]
pub fn StockCard(card: CardView) -> impl IntoView {
    let CardView {
        title,
        badge,
        price,
        tiles,
        details,
        ..
    } = card;

    view! {
        <article class="card stock-card">
            <div class="stock-card__heading">
                <h2>{title}</h2>
                <span class="badge badge-success">{badge}</span>
            </div>
            <div class="stock-card__price">{price}</div>
            <div class="stock-card__tiles">
                {tiles.into_iter().map(|tile| view! { <MetricTile tile=tile /> }).collect_view()}
            </div>
            <div class="stock-card__details">
                {details.into_iter().map(|row| view! { <DetailRow row=row /> }).collect_view()}
            </div>
        </article>
    }
}

#[component]
fn MetricTile(tile: LabeledValue) -> impl IntoView {
    view! {
        <div class="metric-tile">
            <div class="text-secondary text-sm">{tile.label}</div>
            <div class=value_class(&tile)>{tile.value.clone()}</div>
        </div>
    }
}

#[component]
fn DetailRow(row: LabeledValue) -> impl IntoView {
    view! {
        <div class="detail-row text-sm">
            <span class="text-secondary">{row.label}</span>
            <span class=value_class(&row)>{row.value.clone()}</span>
        </div>
    }
}

fn value_class(item: &LabeledValue) -> String {
    match tone_class(item.tone) {
        "" => "value".to_string(),
        tone => format!("value {tone}"),
    }
}
