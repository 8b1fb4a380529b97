use conwire_derive::conwire_error;
use std::borrow::Cow;

#[conwire_error]
pub enum DemoError {
    #[error("I/O failure{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Empty input")]
    Empty { path: String },
}

fn main() {
    let err: DemoError = std::io::Error::other("disk").into();
    let _ = Err::<(), _>(err).context("reading").map_err(|e| e.to_string());
}
