mod points;

pub use points::inside_outside_script;
