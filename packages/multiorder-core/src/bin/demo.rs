use std::env;
use std::fmt::Display;

use multiorder_core::{OrderKind, OrderedBag, Orderable, Result};

fn print_orders<T>(bag: &OrderedBag<T>, label: &str, kinds: &[OrderKind]) -> Result<()>
where
    T: Clone + Display + Orderable,
{
    println!("--- {label} ---");
    println!("Size: {}", bag.len());
    for &kind in kinds {
        let values = bag.try_ordered(kind)?;
        let line: Vec<String> = values.iter().map(ToString::to_string).collect();
        println!("{kind}: {}", line.join(" "));
    }
    println!();
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let mut kinds: Vec<OrderKind> = OrderKind::ALL.to_vec();
    let mut extra: Vec<i64> = Vec::new();
    for arg in env::args().skip(1) {
        if let Some(val) = arg.strip_prefix("--kind=") {
            kinds = vec![val.parse()?];
        } else if let Some(val) = arg.strip_prefix("--values=") {
            extra = val
                .split(',')
                .filter_map(|s| s.trim().parse::<i64>().ok())
                .collect();
        }
    }

    let odd: OrderedBag<i64> = vec![4, 9, 3, 11, 5].into();
    let even: OrderedBag<i64> = vec![10, 2, 7, 1, 6, 12].into();

    println!("Odd container: {odd}");
    print_orders(&odd, "Odd-sized container [5 items]", &kinds)?;
    println!("Even container: {even}");
    print_orders(&even, "Even-sized container [6 items]", &kinds)?;

    if !extra.is_empty() {
        let custom: OrderedBag<i64> = extra.into();
        println!("Custom container: {custom}");
        let label = format!("Custom container [{} items]", custom.len());
        print_orders(&custom, &label, &kinds)?;
    }
    Ok(())
}
