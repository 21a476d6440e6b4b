use convbench_image::Image;
use convbench_imgproc::{
    filter::{
        filter3x3, filter3x3_parallel, filter3x3_serial,
        kernels::{FilterKernel, BLUR, SHARPEN},
        FilterError,
    },
    parallel::{ExecutionStrategy, WorkerPool},
    pipeline::{blur_sharpen, run_stages, PIPELINE_STAGES},
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_image(rng: &mut StdRng, width: usize, height: usize) -> Image<u8, 1> {
    let data = (0..width * height).map(|_| rng.random::<u8>()).collect();
    Image::new([width, height].into(), data).unwrap()
}

fn border_pixels(img: &Image<u8, 1>) -> Vec<u8> {
    let (w, h) = (img.width(), img.height());
    let mut out = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if x == 0 || y == 0 || x == w - 1 || y == h - 1 {
                out.push(img.get_pixel(x, y, 0).unwrap());
            }
        }
    }
    out
}

#[test]
fn test_random_images_serial_equals_parallel() -> Result<(), FilterError> {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let pools = [1, 2, 3, 4, 7, 16]
        .into_iter()
        .map(WorkerPool::new)
        .collect::<Result<Vec<_>, _>>()?;

    for _ in 0..25 {
        let width = rng.random_range(3..48);
        let height = rng.random_range(3..48);
        let src = random_image(&mut rng, width, height);

        for kernel in [&BLUR, &SHARPEN] {
            let serial = filter3x3_serial(&src, kernel)?;
            for pool in &pools {
                let parallel = filter3x3_parallel(&src, kernel, pool)?;
                assert_eq!(
                    serial.as_slice(),
                    parallel.as_slice(),
                    "{}x{} with {} threads",
                    width,
                    height,
                    pool.num_threads()
                );
            }
        }
    }

    Ok(())
}

#[test]
fn test_random_images_border_is_zero() -> Result<(), FilterError> {
    let mut rng = StdRng::seed_from_u64(7);
    let strategies = [
        ExecutionStrategy::Serial,
        ExecutionStrategy::Parallel(WorkerPool::new(3)?),
    ];

    for _ in 0..10 {
        let width = rng.random_range(3..32);
        let height = rng.random_range(3..32);
        let src = random_image(&mut rng, width, height);
        for strategy in &strategies {
            for kernel in [FilterKernel::Blur, FilterKernel::Sharpen] {
                let dst = filter3x3(&src, kernel.kernel(), strategy)?;
                assert!(border_pixels(&dst).iter().all(|&v| v == 0));
            }
            let dst = blur_sharpen(&src, strategy)?;
            assert!(border_pixels(&dst).iter().all(|&v| v == 0));
        }
    }

    Ok(())
}

#[test]
fn test_pipeline_equals_manual_chain() -> Result<(), FilterError> {
    let mut rng = StdRng::seed_from_u64(42);
    let src = random_image(&mut rng, 64, 40);
    let pool = WorkerPool::new(5)?;

    let manual = filter3x3_serial(&filter3x3_serial(&src, &BLUR)?, &SHARPEN)?;
    let serial = run_stages(&src, &PIPELINE_STAGES, &ExecutionStrategy::Serial)?;
    let parallel = blur_sharpen(&src, &ExecutionStrategy::Parallel(pool))?;

    assert_eq!(manual, serial);
    assert_eq!(manual, parallel);

    Ok(())
}

#[test]
fn test_input_is_not_modified() -> Result<(), FilterError> {
    let mut rng = StdRng::seed_from_u64(1);
    let src = random_image(&mut rng, 20, 20);
    let copy = src.clone();

    let strategy = ExecutionStrategy::Parallel(WorkerPool::new(2)?);
    let first = blur_sharpen(&src, &strategy)?;
    let second = blur_sharpen(&src, &strategy)?;

    assert_eq!(src, copy);
    assert_eq!(first, second);

    Ok(())
}
