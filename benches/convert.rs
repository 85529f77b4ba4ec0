use divan::Bencher;
use foldmark::{format_html, Options};

fn main() {
    divan::main();
}

fn sample(sections: usize) -> String {
    let mut s = String::with_capacity(sections * 400);
    for i in 0..sections {
        s.push_str(&format!("# Chapter {i}\n\nSome *prose* with **bold** and `code`.\n"));
        s.push_str("## Details\n- one\n  - nested @@#0a0 green@@\n- two [link](http://example.com)\n");
        s.push_str("> quoted %%marked%% line\n> and another\n\n");
        s.push_str("| a | b |\n|---|---|\n| ~~x~~ | __y__ |\n\n");
        s.push_str("> [!NOTE]\n> Remember {name}.\n\n");
        s.push_str("```rust\nfn main() { println!(\"<hi>\"); }\n```\n---\n");
    }
    s
}

#[divan::bench(args = [10, 100, 1000])]
fn convert(b: Bencher, sections: usize) {
    let s = sample(sections);
    let options = Options::default();

    b.bench(|| {
        let mut output = String::new();
        format_html(&s, &options, &mut output).unwrap();
        output
    });
}
