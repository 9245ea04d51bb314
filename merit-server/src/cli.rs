use clap::Parser;

#[derive(Parser)]
#[command(version, about, propagate_version = true)]
pub struct Args {
    #[clap(long, default_value = "0.0.0.0:8888", env = "BIND_ADDRESS")]
    pub bind_address: String,
}
