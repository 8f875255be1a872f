//! Performance benchmarks for replymark
//!
//! Run with: cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Sample replies of various sizes
mod samples {
    pub const TINY: &str = "Hello, **world**!";

    pub const SMALL: &str = r#"## Summary

The fix is *small*: update the **config** and restart.

- Edit `settings.toml`
- Restart the service
- Check the [dashboard](https://example.com/status)
"#;

    pub const MEDIUM: &str = r#"# Migration plan

**Owner:** Platform team
**Status:** In progress

Here is what changes:

1. Move the cache to the new cluster
2. Switch reads with a ==feature flag==
3. Remove the ~~legacy~~ path

```rust
fn main() {
    println!("Hello, world!");
}
```

> Rollback stays available for a day.

- [x] Draft the plan
- [ ] Schedule the window

---

See the notes[^1] for details.
"#;

    /// Generate a long reply by repeating sections
    pub fn large() -> String {
        let section = r#"
### Step

This paragraph has *emphasis*, **strong**, `code` and [links](https://example.com).

- First point with **bold** text
- Second point with *italic* text

```sh
cargo build --release
```

"#;
        section.repeat(50)
    }

    /// Many star runs that never close
    pub fn pathological_emphasis() -> String {
        "*a ".repeat(1000) + &"**b ".repeat(1000)
    }

    /// Many openers with a single far-away closer each
    pub fn pathological_links() -> String {
        "[a".repeat(2000) + "](u)"
    }

    /// Many fences in one reply
    pub fn many_fences() -> String {
        "```\nx\n```\n".repeat(500)
    }
}

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    for (name, input) in [
        ("tiny", samples::TINY),
        ("small", samples::SMALL),
        ("medium", samples::MEDIUM),
    ] {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(name, |b| b.iter(|| replymark::to_html(black_box(input))));
    }

    let large = samples::large();
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("large", |b| {
        b.iter(|| replymark::to_html(black_box(&large)))
    });

    group.finish();
}

fn bench_escaping(c: &mut Criterion) {
    let mut group = c.benchmark_group("escaping");

    let plain = "Plain reply text without any special characters. ".repeat(100);
    group.throughput(Throughput::Bytes(plain.len() as u64));
    group.bench_function("plain_text", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(plain.len());
            replymark::escape::escape_text_into(&mut out, black_box(plain.as_bytes()));
            out
        })
    });

    let html_heavy = "<script>alert('xss')</script> & more <tags> here! ".repeat(100);
    group.throughput(Throughput::Bytes(html_heavy.len() as u64));
    group.bench_function("html_heavy", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(html_heavy.len() * 2);
            replymark::escape::escape_text_into(&mut out, black_box(html_heavy.as_bytes()));
            out
        })
    });

    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    group.sample_size(20);

    for (name, input) in [
        ("emphasis", samples::pathological_emphasis()),
        ("links", samples::pathological_links()),
        ("fences", samples::many_fences()),
    ] {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| replymark::to_html(black_box(&input)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rendering, bench_escaping, bench_pathological);
criterion_main!(benches);
