mod uniform_square;

pub use uniform_square::UniformSquareSampler;
