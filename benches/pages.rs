// benches/pages.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use make_class_list::{
    assignments::parse_assignments,
    page::generate_pages,
    roster::extract_roster,
};

const STUDENTS: u32 = 400;
const GROUPS: u32 = 20;

/// Synthetic roster page shaped like the class list export.
fn sample_roster() -> String {
    let mut html = String::from("<html><body>\n");
    for i in 0..STUDENTS {
        html.push_str(&format!(
            "<div class=\"sv-panel\"><img src=\"p/{i}.jpg\"><p>Student {i}</p><p>{}</p></div>\n",
            20230000 + i
        ));
    }
    html.push_str("</body></html>\n");
    html
}

/// Every tenth assignment has no roster entry.
fn sample_csv() -> String {
    let mut csv = String::from("Student number,Name,Group\n");
    for i in 0..STUDENTS {
        let id = if i % 10 == 0 { 90000000 + i } else { 20230000 + i };
        csv.push_str(&format!("{id},\"Student, {i}\",Tut {}\n", i % GROUPS));
    }
    csv
}

fn bench_pages(c: &mut Criterion) {
    let html = sample_roster();
    let csv = sample_csv();

    c.bench_function("extract_roster", |b| {
        b.iter(|| {
            let roster = extract_roster(black_box(&html), "div.sv-panel").unwrap();
            black_box(roster.len())
        })
    });

    c.bench_function("parse_assignments", |b| {
        b.iter(|| {
            let table = parse_assignments(black_box(csv.as_bytes())).unwrap();
            black_box(table.total())
        })
    });

    let roster = extract_roster(&html, "div.sv-panel").unwrap();
    let table = parse_assignments(csv.as_bytes()).unwrap();
    c.bench_function("generate_pages", |b| {
        b.iter(|| {
            let pages = generate_pages(black_box(&table), black_box(&roster));
            black_box(pages.len())
        })
    });
}

criterion_group!(benches, bench_pages);
criterion_main!(benches);
