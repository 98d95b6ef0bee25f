use clap::{Args, Parser, Subcommand};

use controls::channel::{ChannelKind, ColorBoard};
use controls::consts::{
    DEFAULT_EXPORT_FORMAT, DEFAULT_GLOBAL_COLOR, DEFAULT_TARGET_COLOR, GENERIC_RENDER_ERROR,
};
use controls::form::{Alignment, DEFAULT_BANNER, FormState, banner_label};
use controls::preview::fragment_text;
use controls::request::{EXPORT_FORMATS, ExportRequest, RenderRequest};

const RENDER_PATH: &str = "/ascii-art";
const EXPORT_PATH: &str = "/export";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid alignment `{0}`; expected left, center, or right")]
    InvalidAlign(String),
    #[error("unknown banner `{0}`; expected standard, shadow, or thinkertoy")]
    UnknownBanner(String),
    #[error("unknown format `{0}`; expected txt, html, json, or svg")]
    UnknownFormat(String),
    #[error("nothing to render: text is empty")]
    EmptyText,
    #[error("nothing to export: the rendered banner is empty")]
    EmptyExport,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("service returned HTTP {status}: {message}")]
    Service { status: u16, message: String },
    #[error("could not write `{path}`: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Parser, Debug)]
#[command(name = "asciiboard-cli", about = "Asciiboard rendering service CLI")]
struct Cli {
    #[arg(long, env = "ASCIIBOARD_BASE_URL", default_value = "http://127.0.0.1:8080")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    Ping,
    Render(RenderArgs),
    Export(ExportArgs),
}

#[derive(Args, Debug)]
struct RenderOpts {
    text: String,

    #[arg(long, default_value = DEFAULT_BANNER)]
    banner: String,

    #[arg(long, default_value = "left")]
    align: String,

    #[arg(long, default_value = DEFAULT_GLOBAL_COLOR)]
    color: String,

    #[arg(long, default_value = "", help = "Comma-separated list of letters to color")]
    targets: String,

    #[arg(long, default_value = DEFAULT_TARGET_COLOR)]
    target_color: String,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    opts: RenderOpts,

    #[arg(long, default_value_t = false, help = "Print the markup fragment instead of plain text")]
    raw: bool,
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[command(flatten)]
    opts: RenderOpts,

    #[arg(long, default_value = DEFAULT_EXPORT_FORMAT)]
    format: String,

    #[arg(long, default_value = "")]
    filename: String,

    #[arg(long, help = "Output path; defaults to <filename>.<format>")]
    out: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext {
        base_url: cli.base_url,
    };

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::Render(args) => run_render(&ctx, args).await,
        Command::Export(args) => run_export(&ctx, args).await,
    }
}

async fn run_ping(cli: &CliContext) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let url = format!("{}/", cli.base_url.trim_end_matches('/'));
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Service {
            status: status.as_u16(),
            message: "service not healthy".to_owned(),
        });
    }
    println!("ok");
    Ok(())
}

async fn run_render(cli: &CliContext, args: RenderArgs) -> Result<(), CliError> {
    let request = build_render_request(&args.opts)?;
    let markup = post_render(cli, &request).await?;
    if args.raw {
        println!("{markup}");
    } else {
        println!("{}", fragment_text(&markup));
    }
    Ok(())
}

async fn run_export(cli: &CliContext, args: ExportArgs) -> Result<(), CliError> {
    if !EXPORT_FORMATS.iter().any(|(value, _)| *value == args.format) {
        return Err(CliError::UnknownFormat(args.format));
    }

    let request = build_render_request(&args.opts)?;
    let markup = post_render(cli, &request).await?;
    let plain = fragment_text(&markup);

    let export =
        ExportRequest::from_parts(&plain, &args.format, &args.filename).ok_or(CliError::EmptyExport)?;

    let client = reqwest::Client::new();
    let url = format!("{}{}", cli.base_url.trim_end_matches('/'), EXPORT_PATH);
    let response = client.post(url).form(&export.form_fields()).send().await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(service_error(status.as_u16(), &body));
    }
    let bytes = response.bytes().await?;

    let path = args.out.unwrap_or_else(|| export.download_name());
    std::fs::write(&path, &bytes).map_err(|source| CliError::Write {
        path: path.clone(),
        source,
    })?;
    eprintln!("exported {} bytes to {path}", bytes.len());
    Ok(())
}

/// Build the render request the same way the web client does, from
/// defaulted form and color state.
fn build_render_request(opts: &RenderOpts) -> Result<RenderRequest, CliError> {
    if banner_label(&opts.banner).is_none() {
        return Err(CliError::UnknownBanner(opts.banner.clone()));
    }
    let alignment =
        Alignment::from_name(&opts.align).ok_or_else(|| CliError::InvalidAlign(opts.align.clone()))?;

    let form = FormState {
        text: opts.text.clone(),
        banner: opts.banner.clone(),
        alignment,
        color_targets: opts.targets.clone(),
    };
    let mut colors = ColorBoard::default();
    colors.set(ChannelKind::Global, &opts.color);
    colors.set(ChannelKind::Target, &opts.target_color);

    RenderRequest::from_state(&form, &colors).ok_or(CliError::EmptyText)
}

async fn post_render(cli: &CliContext, request: &RenderRequest) -> Result<String, CliError> {
    let client = reqwest::Client::new();
    let url = format!("{}{}", cli.base_url.trim_end_matches('/'), RENDER_PATH);
    let response = client.post(url).form(&request.form_fields()).send().await?;
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(service_error(status.as_u16(), &body));
    }
    Ok(body)
}

fn service_error(status: u16, body: &str) -> CliError {
    let trimmed = body.trim();
    let message = if trimmed.is_empty() {
        GENERIC_RENDER_ERROR.to_owned()
    } else {
        trimmed.to_owned()
    };
    CliError::Service { status, message }
}
