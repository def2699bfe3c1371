#![allow(warnings)]
//! ReLoop Frontend Entry Point

mod app;
mod components;
mod context;
mod filter;
mod ids;
mod models;
mod photo;
mod seed;
mod storage;
mod store;
mod timefmt;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
