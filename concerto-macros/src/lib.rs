mod utils;

use proc_macro::{Delimiter, Group, TokenStream, TokenTree};

use utils::LoopOptions;

/// Runs `fn main` inside an event loop.
///
/// The body runs as the loop's entry point; the loop is then driven until
/// idle and the body's value is returned.
///
/// Options: `virtual_time`, `turn_limit = N`.
#[proc_macro_attribute]
pub fn main(attr: TokenStream, item: TokenStream) -> TokenStream {
    let options = match LoopOptions::parse(attr) {
        Ok(options) => options,
        Err(message) => return utils::compile_error(&message),
    };

    wrap_body(item, |block| {
        format!(
            "{{
                let event_loop = {};
                event_loop
                    .run(move || {{
                        {}
                    }})
                    .expect(\"event loop failed\")
            }}",
            options.builder(),
            block
        )
    })
}

/// Marks a function as a test and runs its body inside an event loop.
///
/// The loop is driven until idle before the test returns, so timers
/// scheduled by the body fire (and may panic) within the test.
///
/// Options: `virtual_time`, `turn_limit = N`.
#[proc_macro_attribute]
pub fn test(attr: TokenStream, item: TokenStream) -> TokenStream {
    let options = match LoopOptions::parse(attr) {
        Ok(options) => options,
        Err(message) => return utils::compile_error(&message),
    };

    let wrapped = wrap_body(item, |block| {
        format!(
            "{{
                let event_loop = {};
                event_loop
                    .run(move || {{ {} }})
                    .expect(\"event loop failed\");
            }}",
            options.builder(),
            block
        )
    });

    let test_attr: TokenStream = "#[test]".parse().unwrap_or_default();
    let mut result: Vec<TokenTree> = test_attr.into_iter().collect();
    result.extend(wrapped);

    result.into_iter().collect()
}

/// Replaces the last brace-delimited group of `item` (the function body)
/// with the source produced by `wrap`.
fn wrap_body(item: TokenStream, wrap: impl FnOnce(String) -> String) -> TokenStream {
    let mut tokens: Vec<TokenTree> = item.into_iter().collect();

    let Some(pos) = tokens
        .iter()
        .rposition(|t| matches!(t, TokenTree::Group(g) if g.delimiter() == Delimiter::Brace))
    else {
        return utils::compile_error("expected a function body");
    };

    let block = match &tokens[pos] {
        TokenTree::Group(g) => g.stream().to_string(),
        _ => return utils::compile_error("expected a function body"),
    };

    let body = match wrap(block).parse::<TokenStream>() {
        Ok(body) => body,
        Err(err) => return utils::compile_error(&format!("event loop macro error: {err}")),
    };

    tokens[pos] = TokenTree::Group(Group::new(Delimiter::Brace, body));
    tokens.into_iter().collect()
}
