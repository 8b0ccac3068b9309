//! Headless demo: drag a movie list past its top edge and watch it snap back.
//!
//! Run with `cargo run -p rebound_list --example movies`.

use rebound_core::events::event_types::{POINTER_DOWN, POINTER_MOVE, POINTER_UP};
use rebound_core::DisplayMetrics;
use rebound_list::{BouncyConfig, BouncyList, LinearListLayout, Orientation};
use rebound_paint::{Color, PaintContext};

const ROW_HEIGHT: f32 = 72.0;
const FRAME_MS: f32 = 1000.0 / 60.0;

fn main() {
    let movies = [
        ("Raising Arizona", 1987),
        ("Vampire's Kiss", 1988),
        ("Con Air", 1997),
        ("Face/Off", 1997),
        ("City of Angels", 1998),
        ("Snake Eyes", 1998),
        ("8mm", 1999),
        ("Gone in 60 Seconds", 2000),
        ("Matchstick Men", 2003),
        ("National Treasure", 2004),
        ("The Wicker Man", 2006),
        ("Ghost Rider", 2007),
        ("National Treasure: Book of Secrets", 2007),
        ("Knowing", 2009),
        ("Kick-Ass", 2010),
        ("Ghost Rider: Spirit of Vengeance", 2012),
    ];

    let mut layout = LinearListLayout::new(Orientation::Vertical, 600.0);
    for _ in &movies {
        layout.push_row(ROW_HEIGHT);
    }

    let metrics = DisplayMetrics::new(1080.0, 1920.0, 2.0);
    let config = BouncyConfig {
        start_overscroll_color: Color::parse("#FF5252").unwrap(),
        end_overscroll_color: Color::parse("#448AFF").unwrap(),
        ..Default::default()
    };
    let list = BouncyList::with_config(layout, &metrics, &config);

    for (title, year) in &movies {
        println!("{year}  {title}");
    }
    println!();

    // Finger lands at the top of the list and pulls down in 24px steps
    list.on_pointer_event(POINTER_DOWN);
    for _ in 0..6 {
        list.on_pointer_event(POINTER_MOVE);
        list.scroll_by(0.0, -24.0);
        println!("dragging   overscroll = {:8.2}", list.overscroll_total());
    }

    // Release: the rows spring back to rest
    list.on_pointer_event(POINTER_UP);
    while list.tick(FRAME_MS) {
        if list.take_needs_paint() {
            let mut ctx = PaintContext::new();
            list.draw(&mut ctx, 1080.0, 600.0);
            println!(
                "springing  overscroll = {:8.2}  ({} paint command)",
                list.overscroll_total(),
                ctx.commands().len()
            );
        }
    }

    println!("settled    overscroll = {:8.2}", list.overscroll_total());
}
