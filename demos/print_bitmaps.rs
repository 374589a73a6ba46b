//! Prints a handful of hard-coded bitmaps and the results of set algebra between them.

use sparsebitmap::SparseBitmap;

fn main() {
    let a = SparseBitmap::from_sorted([1, 2, 100, 150, 1000, 123456]).unwrap();
    let b = SparseBitmap::from_sorted([1, 2, 3, 1000, 123456, 1234567]).unwrap();

    println!("a = {a:?} (cardinality {})", a.cardinality());
    println!("b = {b:?} (cardinality {})", b.cardinality());
    println!("a & b = {:?}", (&a & &b));
    println!("a | b = {:?}", (&a | &b));
    println!("a ^ b = {:?}", (&a ^ &b));

    let sparse: SparseBitmap = SparseBitmap::from_sorted((1..=40).map(|i| i * 4)).unwrap();
    let spread: SparseBitmap = SparseBitmap::from_sorted((1..=40).map(|i| i * 100)).unwrap();
    println!();
    println!("sparse = {sparse:?}");
    println!("spread = {spread:?}");
    println!("sparse & spread = {:?}", sparse.and(&spread));

    let bitmaps = vec![
        SparseBitmap::from_sorted([1, 2, 3, 100, 200]).unwrap(),
        SparseBitmap::from_sorted([2, 3, 100, 300]).unwrap(),
        SparseBitmap::from_sorted([2, 100, 150]).unwrap(),
    ];
    println!();
    println!("and([...3 bitmaps...]) = {:?}", sparsebitmap::and(bitmaps.clone()).unwrap());
    println!("or([...3 bitmaps...])  = {:?}", sparsebitmap::or(bitmaps.clone()));
    println!("xor([...3 bitmaps...]) = {:?}", sparsebitmap::xor(bitmaps));
}
