use pagekit_browser::{BrowserSession, LaunchConfig, TimeoutConfig};
use pagekit_core::{Document, ElementOptions};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = LaunchConfig::new("https://example.com").with_timeouts(TimeoutConfig::fast());
    let browser = BrowserSession::launch(config).await?;
    let utils = browser.utilities();

    utils.cookie_create("theme", "dark").await?;
    utils
        .cookie_create_from_object([("lang", "en"), ("tz", "UTC")])
        .await?;
    println!("theme = {:?}", utils.cookie_get_value("theme").await?);
    println!("lang  = {:?}", utils.cookie_get_value("lang").await?);

    let banner = utils
        .element_create(
            "div",
            ElementOptions::new()
                .classes(["alert", "alert-info"])
                .text("Hello from pagekit")
                .attribute("role", "status"),
        )
        .await?;
    utils.hide_element(&banner).await?;
    println!("hidden: {}", utils.is_hidden(&banner).await?);
    utils.show_element(&banner).await?;

    let document = utils.document();
    document.append_to(&banner, "body").await?;
    println!("{}", document.outer_html(&banner).await?);
    println!("has alert: {}", document.has_class(&banner, "alert").await?);
    document.release(&banner).await?;

    browser.close().await?;
    Ok(())
}
