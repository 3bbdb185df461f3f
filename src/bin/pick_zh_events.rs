use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    event_lists::apps::run_pick_events(std::env::args().skip(1))
}
