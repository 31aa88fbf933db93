use bit_box::{BitBox, BitBoxError};

fn main() -> Result<(), BitBoxError> {
    // Room for 100 feature flags; rounds up to 104 bits.
    let mut features = BitBox::try_new(100)?;
    println!("capacity: {} bits in {} bytes", features.size(), features.byte_len());

    features.set(3);
    features.set(42);
    features.toggle(7);

    // Writing past the end grows the box.
    features.try_set(250)?;
    println!("after set(250): {} bits", features.size());

    println!("all of 3, 42, 250: {}", features.and([3, 42, 250]));
    println!("any of 0, 1, 7:    {}", features.or([0, 1, 7]));
    println!("one of 3, 42:      {}", features.xor([3, 42]));

    let ones: Vec<usize> = features.iter_ones().collect();
    println!("set bits: {:?}", ones);

    features.resize(16);
    println!("after resize(16): {:?}", features);

    Ok(())
}
