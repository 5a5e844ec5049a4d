use fft_prep::{complex_to_real, real_to_complex, round_in_place, zero_pad, Float};
use num_complex::Complex;
use serde::Deserialize;

#[derive(Deserialize)]
struct PadVector<T: Float> {
    x: Vec<Complex<T>>,
    len: usize,
    y: Vec<Complex<T>>,
}

#[derive(Deserialize)]
struct ConvertVector<T: Float> {
    real: Vec<T>,
    complex: Vec<Complex<T>>,
}

#[derive(Deserialize)]
struct RoundVector<T: Float> {
    x: Vec<T>,
    y: Vec<T>,
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

macro_rules! generate_vector_test {
    {
        @pad $type:ty, $test:ident, $file:tt
    } => {
        #[test]
        fn $test() {
            init_logging();
            let serialized = std::include_str!($file);
            let vectors: Vec<PadVector<$type>> = serde_json::from_str(serialized).unwrap();
            for vector in vectors {
                let before = vector.x.clone();
                let padded = zero_pad(&vector.x, vector.len).unwrap();
                assert_eq!(padded, vector.y);
                assert_eq!(vector.x, before);
            }
        }
    };
    {
        @lift $type:ty, $test:ident, $file:tt
    } => {
        #[test]
        fn $test() {
            init_logging();
            let serialized = std::include_str!($file);
            let vectors: Vec<ConvertVector<$type>> = serde_json::from_str(serialized).unwrap();
            for vector in vectors {
                assert_eq!(real_to_complex(&vector.real), vector.complex);
            }
        }
    };
    {
        @project $type:ty, $test:ident, $file:tt
    } => {
        #[test]
        fn $test() {
            init_logging();
            let serialized = std::include_str!($file);
            let vectors: Vec<ConvertVector<$type>> = serde_json::from_str(serialized).unwrap();
            for vector in vectors {
                assert_eq!(complex_to_real(&vector.complex), vector.real);
            }
        }
    };
    {
        @round $type:ty, $test:ident, $file:tt
    } => {
        #[test]
        fn $test() {
            init_logging();
            let serialized = std::include_str!($file);
            let vectors: Vec<RoundVector<$type>> = serde_json::from_str(serialized).unwrap();
            for mut vector in vectors {
                round_in_place(&mut vector.x);
                assert_eq!(vector.x, vector.y);
            }
        }
    }
}

generate_vector_test! { @pad f32, pad_f32, "vectors/pad.json" }
generate_vector_test! { @pad f64, pad_f64, "vectors/pad.json" }
generate_vector_test! { @lift f32, lift_f32, "vectors/convert.json" }
generate_vector_test! { @lift f64, lift_f64, "vectors/convert.json" }
generate_vector_test! { @project f32, project_f32, "vectors/project.json" }
generate_vector_test! { @project f64, project_f64, "vectors/project.json" }
generate_vector_test! { @round f32, round_f32, "vectors/round.json" }
generate_vector_test! { @round f64, round_f64, "vectors/round.json" }
