use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = kata_api::Args::parse();
	kata_api::run(args).await
}
