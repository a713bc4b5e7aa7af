//! Benchmarks for form reading performance.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lopdf::{dictionary, Document, Object};

use formtab::export::cell_value;
use formtab::{FieldValue, FormReader};

/// Creates a one-page PDF whose AcroForm has `field_count` text fields
/// and as many checkboxes.
fn create_form_pdf(field_count: usize) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => Object::Integer(1),
        }),
    );

    let mut fields = Vec::with_capacity(field_count * 2);
    for i in 0..field_count {
        let text = doc.add_object(dictionary! {
            "FT" => "Tx",
            "T" => Object::string_literal(format!("text_{}", i)),
            "V" => Object::string_literal(format!("Value {} with\r\ntwo lines", i)),
        });
        let check = doc.add_object(dictionary! {
            "FT" => "Btn",
            "T" => Object::string_literal(format!("check_{}", i)),
            "V" => if i % 2 == 0 { "Yes" } else { "Off" },
        });
        fields.push(Object::Reference(text));
        fields.push(Object::Reference(check));
    }

    let acroform_id = doc.add_object(dictionary! { "Fields" => fields });
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
        "AcroForm" => acroform_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// Benchmark PDF header sniffing.
fn bench_version_sniff(c: &mut Criterion) {
    let pdf_data = create_form_pdf(1);
    let non_pdf_data = b"Not a PDF file at all, just random text content";

    c.bench_function("sniff_valid_pdf", |b| {
        b.iter(|| formtab::detect::sniff_version(black_box(&pdf_data)).unwrap());
    });

    c.bench_function("sniff_non_pdf", |b| {
        b.iter(|| formtab::detect::sniff_version(black_box(non_pdf_data)).is_err());
    });
}

/// Benchmark field extraction at various form sizes.
fn bench_form_reading(c: &mut Criterion) {
    let mut group = c.benchmark_group("form_reading");
    let reader = FormReader::new();

    for field_count in [5, 50, 500].iter() {
        let data = create_form_pdf(*field_count);

        group.bench_function(format!("{}_fields", field_count * 2), |b| {
            b.iter(|| reader.read_bytes("bench.pdf", black_box(&data)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the value to cell transform.
fn bench_cell_values(c: &mut Criterion) {
    let form = FormReader::new()
        .read_bytes("bench.pdf", &create_form_pdf(50))
        .unwrap();
    let values: Vec<&FieldValue> = form.fields.values().collect();

    c.bench_function("cell_values_100", |b| {
        b.iter(|| {
            for value in &values {
                black_box(cell_value(Some(value)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_version_sniff,
    bench_form_reading,
    bench_cell_values,
);
criterion_main!(benches);
