use gridband::{Band, Raster, RasterConfig, Result};
use log::info;
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    println!("gridband - Band Demo\n");

    if let Some(path) = env::args().nth(1) {
        return describe_layout(&path);
    }

    println!("1. Single f32 band:");
    let band = Band::<f32>::new(10, 10, 2.0, 7.0)?;
    println!("   Width: {}", band.width());
    println!("   Cell (0, 1): {}", band[(0, 1)]);

    println!("\n2. Mixed f32/i32 raster:");
    let mixed = Raster::new((
        Band::<f32>::new(20, 20, 3.0, 6.765)?,
        Band::<i32>::new(20, 20, 40.501, 60.666)?,
    ))?;
    println!("   Width: {}", mixed.band::<0>().width());
    println!("   f32 cell (0, 10): {}", mixed.band::<0>()[(0, 10)]);
    println!("   i32 nodata: {}", mixed.band::<1>().nodata_value());
    println!("   i32 cell (0, 10): {}", mixed.band::<1>()[(0, 10)]);
    println!("   i32 row 0 col 10: {}", mixed.band::<1>().row(0)?.get(10)?);

    println!("\n3. Per-band nodata and fill values:");
    let triple = Raster::<(Band<i32>, Band<f32>, Band<f64>)>::filled(
        20,
        20,
        (6, 7.2, 4.4),
        (7, 8.3, 5.5),
    )?;
    println!(
        "   Nodata: {}, {}, {}",
        triple.band::<0>().nodata_value(),
        triple.band::<1>().nodata_value(),
        triple.band::<2>().nodata_value()
    );
    println!(
        "   Cell (0, 10): {}, {}, {}",
        triple.band::<0>()[(0, 10)],
        triple.band::<1>()[(0, 10)],
        triple.band::<2>()[(0, 10)]
    );
    println!("   Bands: {}, same size: {}", triple.band_count(), triple.same_size());

    println!("\n4. Statistics after scaling:");
    let mut single = Raster::<(Band<i32>,)>::filled(20, 20, (6,), (7,))?;
    let band = single.band_mut::<0>();
    let nodata = band.nodata_value();
    band[(0, 0)] = nodata;
    band[(0, 1)] = 8;
    band.scale_multiply(3.4)?;
    info!("Scaled {} cells", band.count());
    print_stats(single.first())?;

    println!("\n5. Mismatched extents:");
    match Raster::new((Band::<f32>::with_size(20, 20)?, Band::<i32>::with_size(20, 21)?)) {
        Ok(_) => println!("   Unexpectedly accepted"),
        Err(e) => println!("   Error: {}", e),
    }

    println!("\n6. Mean of an all-nodata band:");
    match Band::<f64>::with_nodata(5, 5, -9999.0)?.avg() {
        Ok(mean) => println!("   Mean: {}", mean),
        Err(e) => println!("   Error: {}", e),
    }

    Ok(())
}

fn describe_layout(path: &str) -> Result<()> {
    let config = RasterConfig::load(path)?;
    println!("Layout {}: {}x{}", path, config.width, config.height);
    print!("{}", config.georeference);

    for index in 0..config.bands.len() {
        println!("\nBand {}:", index);
        let band = config.build_band::<f64>(index)?;
        print_stats(&band)?;
    }

    Ok(())
}

fn print_stats<T: gridband::Numeric + serde::Serialize>(band: &Band<T>) -> Result<()> {
    let stats = band.stats();
    println!("   {}", serde_json::to_string(&stats)?);
    Ok(())
}
