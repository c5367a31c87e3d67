use proc_macro::{TokenStream, TokenTree};

/// Event loop options accepted by `#[concerto::main]` and `#[concerto::test]`.
#[derive(Debug, Default)]
pub(crate) struct LoopOptions {
    /// Run on the virtual clock.
    pub(crate) virtual_time: bool,

    /// Maximum number of loop turns.
    pub(crate) turn_limit: Option<u64>,
}

impl LoopOptions {
    /// Parses `virtual_time` and `turn_limit = N` from an attribute.
    ///
    /// Unknown options are reported as an error message.
    pub(crate) fn parse(attr: TokenStream) -> Result<Self, String> {
        let mut options = Self::default();

        for source in option_sources(attr) {
            let text = source.as_str();

            if text == "virtual_time" {
                options.virtual_time = true;
            } else if let Some(value) = text.strip_prefix("turn_limit") {
                let value = value.trim_start().trim_start_matches('=').trim();
                let limit = value
                    .parse::<u64>()
                    .map_err(|_| format!("invalid turn_limit value: {value}"))?;
                options.turn_limit = Some(limit);
            } else {
                return Err(format!("unknown event loop option: {text}"));
            }
        }

        Ok(options)
    }

    /// Source of the `LoopBuilder` expression configured by these options.
    pub(crate) fn builder(&self) -> String {
        let mut builder = String::from("::concerto::LoopBuilder::new()");

        if self.virtual_time {
            builder.push_str(".clock(::concerto::Clock::Virtual)");
        }

        if let Some(limit) = self.turn_limit {
            builder.push_str(&format!(".turn_limit({limit})"));
        }

        builder.push_str(".build()");
        builder
    }
}

/// Renders the comma-separated options of an attribute as source strings.
///
/// Identifiers that follow another word are separated by a space; every
/// other token is appended as-is, so `turn_limit = 100` renders as
/// `turn_limit=100`. Empty options (such as a trailing comma) are dropped.
fn option_sources(attr: TokenStream) -> Vec<String> {
    let mut sources = vec![String::new()];

    for token in attr {
        if matches!(&token, TokenTree::Punct(p) if p.as_char() == ',') {
            sources.push(String::new());
            continue;
        }

        let Some(source) = sources.last_mut() else {
            continue;
        };

        let follows_word = source.ends_with(|c: char| c.is_alphanumeric() || c == '_');
        if follows_word && matches!(token, TokenTree::Ident(_)) {
            source.push(' ');
        }
        source.push_str(&token.to_string());
    }

    sources.retain(|source| !source.is_empty());
    sources
}

/// Builds a `compile_error!` invocation carrying `message`.
pub(crate) fn compile_error(message: &str) -> TokenStream {
    format!("compile_error!({message:?});")
        .parse()
        .unwrap_or_default()
}
