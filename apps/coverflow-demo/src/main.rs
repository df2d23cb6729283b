mod cli;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use coverflow::{PagedView, PagerContainer, PagerContainerOptions, Point, Rect, View};
use coverflow_foundation::PointerDispatcher;
use coverflow_testing::{HeadlessPager, InvalidationCounter, TouchRobot};
use session::Step;
use std::rc::Rc;

const CONTAINER_WIDTH: f32 = 1080.0;
const CONTAINER_HEIGHT: f32 = 600.0;
/// The pager covers the middle of the container; neighbouring covers peek
/// out on both sides.
const PAGER_RECT: Rect = Rect {
    x: 240.0,
    y: 0.0,
    width: 600.0,
    height: 600.0,
};
const DRAG_STEPS: usize = 12;

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let script = cli.script();
    let covers = cli.covers;
    let options = PagerContainerOptions::default().with_click_index_policy(cli.policy.into());

    println!("=== Coverflow Pager Container ===");
    println!("{covers} covers, pager spans x={}..{}", PAGER_RECT.left(), PAGER_RECT.right());
    println!("Taps left of the pager pick the previous cover, taps right of it the next.");
    println!();

    let pager = Rc::new(HeadlessPager::new(covers, PAGER_RECT));
    let children: Vec<Rc<dyn View>> = vec![pager.clone()];
    let mut container = PagerContainer::attach_paged_view_with_options(children, options)
        .context("failed to attach the cover pager")?;
    container.on_size_changed(CONTAINER_WIDTH, CONTAINER_HEIGHT);

    let hints = container.render_hints();
    log::info!(
        "render hints: clip_children={}, prefer_software_layer={}",
        hints.clip_children,
        hints.prefer_software_layer
    );

    let clicked_pager = pager.clone();
    container.set_on_click_item_listener(move |index| {
        println!("index = [{index}]");
        clicked_pager.set_current_item(index);
    });

    let redraws = InvalidationCounter::new();
    container.set_on_invalidate(redraws.callback());

    let mut robot = TouchRobot::new();
    let mut dispatcher = PointerDispatcher::new();
    let y = CONTAINER_HEIGHT / 2.0;

    for step in script {
        redraws.reset();
        log::info!("{step}");
        match step {
            Step::Tap { x } => {
                robot.queue_tap(&mut dispatcher, x, y);
                dispatcher.drain(|_, event| {
                    container.dispatch_touch(&event);
                });
            }
            Step::LongPress { x } => {
                robot.long_press(&mut container, x, y);
            }
            Step::Drag { from_x, to_x } => {
                robot.drag(
                    &mut container,
                    Point::new(from_x, y),
                    Point::new(to_x, y),
                    DRAG_STEPS,
                );
            }
        }
        println!(
            "{step}: showing cover {} of {covers} ({} redraws)",
            pager.current_item() + 1,
            redraws.count()
        );
    }

    Ok(())
}
