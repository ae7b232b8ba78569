mod timer;

pub use timer::draw_timer;
