use planar_geometry::Point;

fn main() {
    let p1 = Point::new(1.0, 2.0);
    let p2 = Point::new(3.0, 4.0);

    println!("p1:      {}", p1);
    println!("p2:      {}", p2);
    println!("p1 + p2: {}", p1 + p2);

    // Walk a point along a fixed offset.
    let step = Point::new(0.5, -0.25);
    let mut current = Point::default();
    for i in 0..5 {
        current = current + step;
        println!("Step {:>2}: {}", i + 1, current);
    }
}
