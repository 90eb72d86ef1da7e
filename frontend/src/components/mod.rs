pub mod dashboard;
mod header;
mod notices;
mod stock_card;
