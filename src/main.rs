use pastiche_studio::{
    logger, style_presets, ConsolePresenter, ImageFormat, Mode, Phase, StudioClient, StudioConfig,
};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    logger::init_with_config(
        logger::LoggerConfig::development().with_level(logger::LogLevel::Debug),
    )?;

    log::info!("🔍 Checking studio environment...");
    if env::var("STUDIO_FUNCTION_URL").is_err() {
        log::error!("❌ STUDIO_FUNCTION_URL is not set");
        log::info!("💡 Point it at your generate-image function endpoint and retry");
        return Err("missing STUDIO_FUNCTION_URL".into());
    }
    match env::var("STUDIO_API_KEY") {
        Ok(key) => log::debug!("API key starts with: {}...", &key[..5.min(key.len())]),
        Err(_) => log::warn!("⚠️  No STUDIO_API_KEY set, calling the endpoint unauthenticated"),
    }

    let config = StudioConfig::from_env();
    let client = match StudioClient::new(config) {
        Ok(client) => {
            log::info!("✅ Studio client initialized successfully");
            client
        }
        Err(e) => {
            log::error!("❌ Failed to initialize studio client: {}", e);
            return Err(e.into());
        }
    };

    log::info!("🎨 Available style presets:");
    for preset in style_presets() {
        log::info!("  {} - {}", preset.label, preset.value);
    }

    let prompt = env::args()
        .nth(1)
        .unwrap_or_else(|| "A serene landscape with mountains and a lake at sunset".to_string());

    let mut session = client.new_session();
    session.set_prompt(&prompt);
    session.set_style("digital art, vibrant colors, modern, detailed");
    session.set_size("landscape");

    let mut presenter = ConsolePresenter::new(".");

    log::info!("🧪 Submitting generate request: {}", prompt);
    if let Err(e) = session.submit(Mode::Generate, &mut presenter).await {
        log::error!("❌ Submission rejected: {}", e);
        return Err(e.into());
    }

    match session.state().phase {
        Phase::Succeeded => {
            log::info!("✅ Generation succeeded, saving the result");
            if let Err(e) = session.download_result(ImageFormat::Png, &mut presenter).await {
                log::warn!("⚠️  Could not save the image: {}", e);
            }
        }
        Phase::Failed => {
            log::warn!("⚠️  Generation failed; the session is ready to resubmit");
        }
        phase => log::warn!("Unexpected final phase: {:?}", phase),
    }

    log::info!("🎉 Demo run complete");
    Ok(())
}
