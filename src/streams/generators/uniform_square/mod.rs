mod uniform_square_sampler;

pub use uniform_square_sampler::UniformSquareSampler;
