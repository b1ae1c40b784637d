//! Demonstrates the tree: inserts some keys, prints them in order, searches for a couple of
//! keys, deletes one and prints the keys again.

use clap::Parser;

use int_bst::BinarySearchTree;

#[derive(Parser, Debug)]
#[command(version, about = "Insert, search and delete keys in a binary search tree")]
struct Args {
    /// Keys to insert, in order
    #[arg(
        long,
        num_args = 1..,
        allow_negative_numbers = true,
        default_values_t = [50, 30, 70, 20, 40, 60, 80]
    )]
    keys: Vec<i32>,

    /// Keys to search for after inserting
    #[arg(long, num_args = 1.., allow_negative_numbers = true, default_values_t = [40, 25])]
    search: Vec<i32>,

    /// Key to delete after searching
    #[arg(long, allow_negative_numbers = true, default_value_t = 30)]
    delete: i32,
}

fn main() {
    let args = Args::parse();

    let mut tree: BinarySearchTree = args.keys.iter().copied().collect();
    println!("In-order: {}", tree);
    println!("Height: {}", tree.height());

    for key in &args.search {
        println!("search {}: {}", key, tree.search(*key));
    }

    tree.delete(args.delete);
    println!("After deleting {}: {}", args.delete, tree);
    println!("Height: {}", tree.height());
}
