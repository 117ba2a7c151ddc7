use agora_p256::P256Point;
use rand_core::OsRng;
use structopt::StructOpt;

use std::error::Error;

#[derive(StructOpt)]
struct Opt {
    #[structopt(long, help = "SEC1 encoded point as hex, the generator if omitted")]
    point: Option<String>,
    #[structopt(long, help = "32 byte big-endian scalar as hex")]
    scalar: Option<String>,
    #[structopt(long, help = "multiply by a random scalar instead")]
    random: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let _ = env_logger::try_init();
    let opt = Opt::from_args();

    let point = match opt.point {
        Some(encoded) => encoded.parse::<P256Point>()?,
        None => P256Point::GENERATOR,
    };

    let product = if opt.random {
        let scalar = agora_p256::P256Scalar::random(&mut OsRng);
        log::info!("using random scalar {}", hex::encode(scalar.to_be_bytes()));
        &point * scalar
    } else if let Some(scalar) = opt.scalar {
        let bytes = hex::decode(scalar.trim_start_matches("0x"))?;
        point.multiply(&bytes)?
    } else {
        point
    };

    if product.is_identity() {
        println!("point at infinity");
        return Ok(());
    }
    println!("compressed:   {}", hex::encode(product.encode(true)?));
    println!("uncompressed: {}", hex::encode(product.encode(false)?));
    Ok(())
}
