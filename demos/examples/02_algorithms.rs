use crest_core::{
    GainMatrix, Point2D, SortPolicy, argsort, closest_pair, max_subarray, max_subrectangle,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Maximum subarray of daily changes.
    let changes = [2.0, -1.0, 2.0, 3.0, -9.0, 4.0];
    let best = max_subarray(&changes)?;
    println!(
        "max subarray of {changes:?}: [{}, {}] sum {}",
        best.start, best.end, best.sum
    );

    // 2. Maximum sub-rectangle over two stacked change series.
    let m = GainMatrix::from_pair(&[1.0, -2.0, 3.0, -1.0], &[-1.0, 3.0, -2.0, 2.0])?;
    let rect = max_subrectangle(&m)?;
    println!(
        "max sub-rectangle: rows {}..={}, columns {}..={}, sum {}",
        rect.top, rect.bottom, rect.left, rect.right, rect.sum
    );

    // 3. Closest pair of (volume, price) points.
    let pts = [
        Point2D::new(0.0, 0.0),
        Point2D::new(3.0, 4.0),
        Point2D::new(0.5, 0.5),
    ];
    let pair = closest_pair(&pts)?;
    println!("closest pair:\n{pair}");

    // 4. Tie handling of the merge sort.
    let keys = [3, 1, 2, 1];
    println!(
        "argsort {keys:?}: stable {:?}, prefer-right {:?}",
        argsort(&keys, SortPolicy::Stable)?,
        argsort(&keys, SortPolicy::PreferRight)?
    );
    Ok(())
}
