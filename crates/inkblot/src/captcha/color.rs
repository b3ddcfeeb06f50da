//! Randomized color generators.

use inkblot_common::Color;
use rand::Rng;

/// Random color whose channel sum leans toward 400 so it is never muddy.
///
/// Red and green are uniform in `[0, 255)`; blue tops the sum up to 400
/// (capped at 255) or is 0 when red and green already exceed it.
pub fn random_color<R: Rng>(rng: &mut R) -> Color {
    let red = rng.random_range(0..255u32);
    let green = rng.random_range(0..255u32);
    let blue = if red + green > 400 {
        0
    } else {
        (400 - red - green).min(255)
    };
    Color::rgb(red as u8, green as u8, blue as u8)
}

/// Pastel color, every channel in `[155, 255)`
pub fn random_light_color<R: Rng>(rng: &mut R) -> Color {
    Color::rgb(
        rng.random_range(155..255),
        rng.random_range(155..255),
        rng.random_range(155..255),
    )
}

/// [`random_color`] darkened by a random shift in `[30, 85)`
pub fn random_deep_color<R: Rng>(rng: &mut R) -> Color {
    let base = random_color(rng);
    let shift = rng.random_range(30..85);
    deepen(base, shift)
}

/// Subtract `shift` from each channel as `|min(c - shift, 255)|`.
///
/// Channels smaller than the shift reflect back up from zero instead of
/// clamping to it.
pub fn deepen(color: Color, shift: i32) -> Color {
    let channel = |c: u8| (i32::from(c) - shift).min(255).unsigned_abs().min(255) as u8;
    Color::rgb(channel(color.r), channel(color.g), channel(color.b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_color_channel_sum() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..2000 {
            let c = random_color(&mut rng);
            let rg = u32::from(c.r) + u32::from(c.g);
            assert_eq!(c.a, 255);
            assert!(c.r < 255 && c.g < 255);
            if rg > 400 {
                assert_eq!(c.b, 0);
            } else {
                assert_eq!(u32::from(c.b), (400 - rg).min(255));
            }
        }
    }

    #[test]
    fn test_light_color_range() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..2000 {
            let c = random_light_color(&mut rng);
            for channel in [c.r, c.g, c.b] {
                assert!((155..255).contains(&channel));
            }
            assert_eq!(c.a, 255);
        }
    }

    #[test]
    fn test_deepen_never_brightens_above_shift() {
        let base = Color::rgb(200, 90, 40);
        assert_eq!(deepen(base, 40), Color::rgb(160, 50, 0));
        for shift in 30..85 {
            let deep = deepen(base, shift);
            assert!(deep.r <= base.r);
            assert!(deep.g <= base.g);
        }
    }

    #[test]
    fn test_deepen_reflects_small_channels() {
        // 10 - 50 = -40, reflected to 40
        assert_eq!(deepen(Color::rgb(10, 0, 255), 50), Color::rgb(40, 50, 205));
    }

    #[test]
    fn test_deep_color_is_opaque() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!((0..500).all(|_| random_deep_color(&mut rng).a == 255));
    }
}
