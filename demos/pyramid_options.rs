extern crate color_eyre;

use color_eyre::eyre::Result;

use band_dog::pyramid::pyramid_options::GaussianPyramidOptions;
use band_dog::features::extrema_finder_parameters::ExtremaFinderParameters;

fn main() -> Result<()> {
    color_eyre::install()?;

    let options = GaussianPyramidOptions::default();
    let s = options.to_yaml_string()?;
    println!("{}", s);

    let deserialized_options = GaussianPyramidOptions::from_yaml_str(&s)?;
    println!("{:?}", deserialized_options);

    let parameters = ExtremaFinderParameters::default();
    println!("{}", serde_yaml::to_string(&parameters)?);

    Ok(())
}
