/// Multi-octave value noise producing the base height field.
///
/// Each octave draws a coarse uniform lattice sized to the current frequency
/// and bilinearly upsamples it to the full grid; octaves accumulate with
/// amplitudes decaying by persistence while frequencies grow by lacunarity.
/// The sum is divided by the total amplitude, so results stay in roughly
/// [0, 1]. Everything is drawn from a single seeded generator in row-major
/// order, which makes the field reproducible per seed.
use crate::config::NoiseConfig;
use crate::world::HeightField;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub fn value_noise(width: usize, height: usize, seed: u64, config: &NoiseConfig) -> HeightField {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out: HeightField = vec![vec![0.0; width]; height];

    let mut amplitude = 1.0_f32;
    let mut frequency = 1.0 / config.scale;
    let mut total_amplitude = 0.0_f32;

    for _ in 0..config.octaves {
        let lattice_w = ((width as f32 * frequency) as usize + 2).max(2);
        let lattice_h = ((height as f32 * frequency) as usize + 2).max(2);
        let lattice: Vec<Vec<f32>> = (0..lattice_h)
            .map(|_| (0..lattice_w).map(|_| rng.random::<f32>()).collect())
            .collect();

        for r in 0..height {
            let fy = lattice_position(r, height, lattice_h);
            let y0 = fy.floor() as usize;
            let y1 = (y0 + 1).min(lattice_h - 1);
            let ty = fy - y0 as f32;

            for q in 0..width {
                let fx = lattice_position(q, width, lattice_w);
                let x0 = fx.floor() as usize;
                let x1 = (x0 + 1).min(lattice_w - 1);
                let tx = fx - x0 as f32;

                let top = lattice[y0][x0] * (1.0 - tx) + lattice[y0][x1] * tx;
                let bottom = lattice[y1][x0] * (1.0 - tx) + lattice[y1][x1] * tx;
                out[r][q] += (top * (1.0 - ty) + bottom * ty) * amplitude;
            }
        }

        total_amplitude += amplitude;
        amplitude *= config.persistence;
        frequency *= config.lacunarity;
    }

    if total_amplitude > 0.0 {
        for row in out.iter_mut() {
            for value in row.iter_mut() {
                *value /= total_amplitude;
            }
        }
    }

    out
}

/// Maps grid index `i` of an `n`-wide axis onto the [0, lattice_n - 1]
/// sampling range. A one-cell axis collapses onto lattice position 0.
fn lattice_position(i: usize, n: usize, lattice_n: usize) -> f32 {
    if n > 1 {
        i as f32 * (lattice_n - 1) as f32 / (n - 1) as f32
    } else {
        0.0
    }
}
