use crate::setup::build::BuildError;
use crate::setup::choices::SamplerChoice;
use crate::streams::Stream;
use crate::streams::generators::UniformSquareSampler;

mod uniform_square;

pub fn build_sampler(choice: SamplerChoice) -> Result<Box<dyn Stream>, BuildError> {
    match choice {
        SamplerChoice::UniformSquare(p) => {
            let s = UniformSquareSampler::try_from(p)?;
            Ok(Box::new(s))
        }
    }
}
