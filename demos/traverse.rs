//! Example that builds or loads a directed graph and prints its traversal order.
//!
//! Without an input file, the graph is the three-vertex cycle A -> B -> C -> A.
//!
//! Usage:
//!   cargo run --example traverse
//!   cargo run --example traverse -- path/to/graph.dot --start a --order bfs
//!   cat path/to/graph.dot | cargo run --example traverse -- - --emit-dot -vv

#[cfg(feature = "dot")]
mod inner {
    use std::fs;
    use std::io::{self, Read};
    use std::process;

    use clap::{Parser, ValueEnum};
    use vertex_walk::{
        DiGraph,
        tracing_support::{LogLevel, init_tracing},
    };

    /// Traverse a directed graph and print the visit order.
    #[derive(Parser, Debug)]
    #[command(author, version, about, long_about = None)]
    struct Args {
        /// Input DOT file path (use '-' for stdin; omit for the built-in cycle)
        input: Option<String>,

        /// Vertex to start from
        #[arg(long, default_value = "A")]
        start: String,

        /// Traversal order
        #[arg(long, value_enum, default_value_t = Order::Dfs)]
        order: Order,

        /// Also print the graph as DOT
        #[arg(long)]
        emit_dot: bool,

        /// Increase log verbosity (repeatable)
        #[arg(short, long, action = clap::ArgAction::Count)]
        verbose: u8,
    }

    #[derive(Clone, Copy, Debug, ValueEnum)]
    enum Order {
        Dfs,
        Bfs,
    }

    pub fn run() {
        let args = Args::parse();
        init_tracing(LogLevel::from_verbosity(args.verbose));

        let graph = match args.input.as_deref() {
            None => cycle_graph(),
            Some("-") => parse_or_exit(&read_stdin_or_exit()),
            Some(path) => parse_or_exit(&read_file_or_exit(path)),
        };

        if args.emit_dot {
            match graph.to_dot_string() {
                Ok(dot) => print!("{dot}"),
                Err(err) => {
                    eprintln!("Failed to render DOT: {err}");
                    process::exit(1);
                }
            }
        }

        let result = match args.order {
            Order::Dfs => graph.traverse(&args.start),
            Order::Bfs => graph.traverse_breadth_first(&args.start),
        };
        match result {
            Ok(path) => println!("{}", path.join(" -> ")),
            Err(err) => {
                eprintln!("Cannot traverse: {err}");
                process::exit(1);
            }
        }
    }

    fn cycle_graph() -> DiGraph<String> {
        let mut graph = DiGraph::new();
        for v in ["A", "B", "C"] {
            graph.add_vertex(v.to_string());
        }
        for (from, to) in [("A", "B"), ("B", "C"), ("C", "A")] {
            if let Err(err) = graph.add_edge(&from.to_string(), &to.to_string()) {
                eprintln!("Failed to build graph: {err}");
                process::exit(1);
            }
        }
        graph
    }

    fn read_stdin_or_exit() -> String {
        let mut buffer = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut buffer) {
            eprintln!("Failed to read stdin: {err}");
            process::exit(1);
        }
        buffer
    }

    fn read_file_or_exit(path: &str) -> String {
        match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                eprintln!("Failed to read '{path}': {err}");
                process::exit(1);
            }
        }
    }

    fn parse_or_exit(data: &str) -> DiGraph<String> {
        match DiGraph::from_dot(data) {
            Ok(graph) => graph,
            Err(err) => {
                eprintln!("Invalid DOT input: {err}");
                process::exit(1);
            }
        }
    }
}

#[cfg(feature = "dot")]
fn main() {
    inner::run();
}

#[cfg(not(feature = "dot"))]
fn main() {
    eprintln!("This example requires the 'dot' feature.");
}
