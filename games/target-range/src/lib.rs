//! Target range - click the bouncing bullseye before your shots run out.

use wasm_bindgen::prelude::*;

mod config;
mod game;
mod meter;
mod scoreboard;
mod session;
mod target;

use game::TargetRange;

range_web::export_game!(TargetRange, "target-range");
