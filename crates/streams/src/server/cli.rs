#[derive(Debug, clap::Parser)]
#[command(name = "serve")]
#[command(about = "Serve the name operations over HTTP")]
pub struct App {
    #[clap(flatten)]
    pub options: ServeOptions,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "STREAMS_PORT", default_value = "8080")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "STREAMS_HOST", default_value = "127.0.0.1")]
    pub host: String,
}

impl ServeOptions {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
