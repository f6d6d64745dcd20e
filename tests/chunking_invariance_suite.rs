mod support;

use mdbalance::pending::close_open_delimiters_with;
use mdbalance::Options;

fn assert_invariant(case_name: &str, markdown: &str, opts: Options, trials: u32, max_bytes: usize) {
    for (chunker, strategy) in support::strategies(case_name, trials, max_bytes) {
        let displays = support::collect_displays(markdown, strategy, opts.clone());
        for (raw, display) in &displays {
            assert!(markdown.starts_with(raw.as_str()), "case={case_name} chunker={chunker}");
            assert_eq!(
                display,
                &close_open_delimiters_with(raw, &opts),
                "case={case_name} chunker={chunker} raw={raw:?}"
            );
        }
        let last = displays.last().map(|(_, d)| d.clone()).unwrap_or_default();
        assert_eq!(
            last,
            close_open_delimiters_with(markdown, &opts),
            "case={case_name} chunker={chunker}"
        );
    }
}

#[test]
fn assistant_style_answers() {
    let answer = r#"
Here is a **quick** overview of the _options_:

1. Use `cargo build` for *debug* builds.
2. Use ~~`make`~~ `cargo build --release` otherwise.

```rust
fn main() {
    println!("**not bold**");
}
```

That's all __folks__.
"#;

    let nested_fences = "````markdown\n```js\nconsole.log(1)\n```\n````\n\nAfter *text*.";
    let tilde_fence = "~~~\ncode with ~~tilde~~ and `ticks`\n~~~\n~~struck~~";
    let unicode = "第一段 **粗体** 和 *斜体*\n\n`代码` ~~删除~~ 🎉";

    let opts = Options::default();
    assert_invariant("assistant_answer", answer, opts.clone(), 16, 32);
    assert_invariant("nested_fences", nested_fences, opts.clone(), 16, 16);
    assert_invariant("tilde_fence", tilde_fence, opts.clone(), 16, 16);
    assert_invariant("unicode", unicode, opts, 16, 8);
}

#[test]
fn finished_stream_has_no_unbalanced_display() {
    let markdown = "Balanced **bold**, *em*, `code`, ~~strike~~ and\n```\nfenced\n```\n";
    for (chunker, strategy) in support::strategies("balanced", 8, 24) {
        let displays = support::collect_displays(markdown, strategy, Options::default());
        let (raw, display) = displays.last().expect("at least one chunk");
        assert_eq!(raw, markdown, "chunker={chunker}");
        assert_eq!(display, markdown, "chunker={chunker}");
    }
}

#[test]
fn invariance_holds_with_families_disabled() {
    let markdown = "**a** `b` ~~c~~\n```\nd\n```\n_e";
    let opts = Options {
        code_fences: false,
        strikethrough: false,
        ..Options::default()
    };
    assert_invariant("disabled_families", markdown, opts, 8, 8);
}
