use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use polywedge::options::WedgeOptions;
use polywedge::progress::NoProgress;
use polywedge::structure::{
    MoleculeType, PolymerResidue, PolymerUnit, SecStrucType,
};
use polywedge::theme::UniformSizeTheme;
use polywedge::visual::create_direction_wedge_mesh;

/// Helical backbone with a sheet run every 16 residues.
fn test_unit(n: usize) -> PolymerUnit {
    PolymerUnit::new(
        0,
        (0..n)
            .map(|i| {
                let t = i as f32 * 0.6;
                PolymerResidue {
                    center: Vec3::new(t.cos() * 2.3, t.sin() * 2.3, i as f32 * 1.5),
                    molecule: MoleculeType::Protein,
                    sec_struc: if i % 16 < 4 {
                        SecStrucType::Sheet
                    } else {
                        SecStrucType::Coil
                    },
                }
            })
            .collect(),
    )
}

fn wedge_mesh_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("direction_wedge_mesh");

    for count in [100_usize, 1_000, 10_000] {
        let unit = test_unit(count);
        let theme = UniformSizeTheme::default();
        let options = WedgeOptions::default();

        let _ = group.bench_function(format!("residues_{count}"), |b| {
            b.iter(|| {
                black_box(
                    create_direction_wedge_mesh(
                        black_box(&unit),
                        &theme,
                        &options,
                        &mut NoProgress,
                        None,
                    )
                    .unwrap(),
                )
            })
        });
    }

    group.finish();
}

fn recycled_mesh_benchmark(c: &mut Criterion) {
    let unit = test_unit(1_000);
    let theme = UniformSizeTheme::default();
    let options = WedgeOptions::default();
    let mut scratch = Some(
        create_direction_wedge_mesh(
            &unit,
            &theme,
            &options,
            &mut NoProgress,
            None,
        )
        .unwrap(),
    );

    let _ = c.bench_function("residues_1000_recycled", |b| {
        b.iter(|| {
            let mesh = create_direction_wedge_mesh(
                &unit,
                &theme,
                &options,
                &mut NoProgress,
                scratch.take(),
            )
            .unwrap();
            scratch = Some(black_box(mesh));
        })
    });
}

criterion_group!(benches, wedge_mesh_benchmark, recycled_mesh_benchmark);
criterion_main!(benches);
