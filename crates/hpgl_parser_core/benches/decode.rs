use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use hpgl_parser_core::{DecoderOptions, HpglDecoder, LayerHandle, PathData, PathStyle, PlotSink};
use std::hint::black_box;

struct NullSink {
    layer_count: usize,
}

impl PlotSink for NullSink {
    #[inline]
    fn create_layer(&mut self, _id: &str, _label: &str) -> LayerHandle {
        self.layer_count += 1;
        LayerHandle::new(self.layer_count - 1)
    }

    #[inline]
    fn append_path(&mut self, _layer: LayerHandle, _path: &PathData, _style: PathStyle) { /* discard */
    }
}

fn make_synthetic_streams() -> (String, String, String) {
    // 1. Many short pen-down episodes (plotter dashes / hatching)
    let mut episode_heavy = String::from("IN;SP1;");
    for i in 0..2000 {
        let x = (i % 400) * 25;
        let y = (i / 400) * 50;
        episode_heavy.push_str(&format!("PU{x},{y};PD{},{};", x + 20, y + 20));
    }
    episode_heavy.push_str("PU;");

    // 2. Few episodes with long coordinate lists (digitized curves)
    let mut polyline_heavy = String::from("IN;SP1;PU0,0;PD");
    for i in 0..20000 {
        if i > 0 {
            polyline_heavy.push(',');
        }
        polyline_heavy.push_str(&format!("{},{}", i * 3 % 10000, i * 7 % 10000));
    }
    polyline_heavy.push_str(";PU;");

    // 3. Pen switches and unknown commands mixed in (real capture shape)
    let mut mixed = String::from("IN;VS30;");
    for i in 0..1000 {
        let pen = i % 8 + 1;
        mixed.push_str(&format!("SP{pen};PU{},{};PD{},{},{},{};", i * 10, i * 5, i * 10 + 40, i * 5, i * 10 + 40, i * 5 + 40));
    }
    mixed.push_str("PU;");

    (episode_heavy, polyline_heavy, mixed)
}

fn bench_decode(c: &mut Criterion) {
    let decoder = HpglDecoder::new(DecoderOptions {
        resolution_x: 1016.0,
        resolution_y: 1016.0,
        show_movements: false,
        canvas_width: 744.09,
        canvas_height: 1052.36,
    });
    let movements_decoder = HpglDecoder::new(DecoderOptions {
        show_movements: true,
        ..decoder.options().clone()
    });

    let (episode_heavy, polyline_heavy, mixed) = make_synthetic_streams();

    let mut group = c.benchmark_group("hpgl_decode");
    for (name, stream) in [
        ("episode_heavy", &episode_heavy),
        ("polyline_heavy", &polyline_heavy),
        ("mixed", &mixed),
    ] {
        group.throughput(Throughput::Bytes(stream.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut sink = NullSink { layer_count: 0 };
                decoder.decode(black_box(stream), &mut sink).unwrap();
            });
        });
    }
    group.throughput(Throughput::Bytes(episode_heavy.len() as u64));
    group.bench_function("episode_heavy_with_movements", |b| {
        b.iter(|| {
            let mut sink = NullSink { layer_count: 0 };
            movements_decoder.decode(black_box(&episode_heavy), &mut sink).unwrap();
        });
    });
    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
