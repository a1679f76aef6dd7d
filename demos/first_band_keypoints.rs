extern crate image as image_rs;
extern crate color_eyre;

use std::path::Path;
use color_eyre::eyre::Result;
use log::info;

use band_dog::image::multi_band_image::MultiBandImage;
use band_dog::pyramid::{gaussian_pyramid::GaussianPyramid, pyramid_options::GaussianPyramidOptions};
use band_dog::features::{
    first_band_dog_finder::FirstBandDogFinder,
    dog_extrema_finder::DogExtremaFinder,
    extrema_finder_parameters::ExtremaFinderParameters,
    interest_point_collector::InterestPointCollector
};

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let image_name = "lenna";
    let image_format = "png";
    let image_folder = "images/";
    let image_out_folder = "output/";
    let image_path = format!("{}{}.{}",image_folder,image_name, image_format);

    let rgb_image = image_rs::open(&Path::new(&image_path))?.to_rgb8();
    let base_image = MultiBandImage::from_rgb_image(&rgb_image, true);

    let options = match Path::new("config/pyramid.yaml").exists() {
        true => GaussianPyramidOptions::load("config/pyramid.yaml")?,
        false => GaussianPyramidOptions::default()
    };

    let mut pyramid = GaussianPyramid::<MultiBandImage>::new(options);
    pyramid.process(&base_image)?;

    let mut finder = FirstBandDogFinder::with_listener(DogExtremaFinder::new(ExtremaFinderParameters::default()), InterestPointCollector::new());

    for (octave_level, octave) in pyramid.octaves.iter().enumerate() {
        let points_before = finder.listener().map_or(0, |collector| collector.points.len());
        finder.process(octave)?;
        let points_after = finder.listener().map_or(0, |collector| collector.points.len());
        info!("octave {}: {} interest points", octave_level, points_after - points_before);

        if octave_level == 0 {
            if let Some(dog_octave) = finder.dog_octave() {
                for (i, image) in dog_octave.images.iter().enumerate() {
                    let name = format!("{}_dog_{}",image_name,i);
                    let file_path = format!("{}{}.{}",image_out_folder,name,image_format);
                    image.to_image().save(file_path)?;
                }
            }
        }
    }

    if let Some(collector) = finder.listener() {
        let points_path = format!("{}{}_points.yaml",image_out_folder,image_name);
        std::fs::write(points_path, collector.to_yaml_string()?)?;
        info!("{} interest points in total", collector.points.len());
    }

    Ok(())
}
