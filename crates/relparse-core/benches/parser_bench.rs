use criterion::{black_box, criterion_group, criterion_main, Criterion};
use relparse_core::ReleaseParser;

fn bench_release_parse(c: &mut Criterion) {
    let parser = ReleaseParser::new().unwrap();

    let inputs = vec![
        "Winx.Club.S06E16.Die.Zombie-Invasion.GERMAN.DUBBED.DL.720p.WEB-DL.h264-pbw",
        "Brave.2012.R5.DVDRip.XViD.LiNE-UNiQUE",
        "The.X-Files.S01E01-E03.DKsubs.1080p.BluRay.HEVC.x265",
        "[ www.Speed.cd ] -Sons.of.Anarchy.S07E07.720p.HDTV.X264-DIMENSION",
        "Eliza Graves (2014) Dual Audio WEB-DL 720p MKV x264",
    ];

    c.bench_function("release_parse_single", |b| {
        b.iter(|| parser.parse(black_box(inputs[0])));
    });

    c.bench_function("release_parse_batch_5", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = parser.parse(black_box(input));
            }
        });
    });

    c.bench_function("catalog_compile", |b| {
        b.iter(|| ReleaseParser::new().unwrap());
    });
}

criterion_group!(benches, bench_release_parse);
criterion_main!(benches);
