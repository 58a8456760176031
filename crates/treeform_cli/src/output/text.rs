//! Text output formatter

use treeform_ast::TreeStats;
use treeform_core::View;

pub fn output_view(view: &View) {
    print!("{}", view.outline());
}

pub fn output_stats(stats: &TreeStats) {
    println!("{:<18} {}", "nodes:", stats.nodes);
    println!("{:<18} {}", "leaves:", stats.leaves);
    println!("{:<18} {}", "composites:", stats.composites);
    println!("{:<18} {}", "empty composites:", stats.empty_composites);
    println!("{:<18} {}", "max depth:", stats.max_depth);
}
