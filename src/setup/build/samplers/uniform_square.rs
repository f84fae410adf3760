use crate::setup::{build::BuildError, choices::UniformSquareParameters};
use crate::streams::generators::UniformSquareSampler;

impl TryFrom<UniformSquareParameters> for UniformSquareSampler {
    type Error = BuildError;

    fn try_from(parameters: UniformSquareParameters) -> Result<Self, Self::Error> {
        let max_points = parameters
            .max_points
            .map(|v| {
                usize::try_from(v).map_err(|_| {
                    BuildError::InvalidParameter("max_points too large for usize".into())
                })
            })
            .transpose()?;

        Ok(match parameters.seed {
            Some(seed) => UniformSquareSampler::new(seed, max_points),
            None => UniformSquareSampler::from_entropy(max_points),
        })
    }
}
