//! triplekit demo: load Turtle into a knowledge base and print it back

use anyhow::{Context, Result};
use clap::Parser as _;
use comfy_table::{ContentArrangement, Table};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::info;
use triplekit::logging;
use triplekit::{KnowledgeBase, Parser, TurtleOptions, TurtleParser};

const SAMPLE: &str = r#"@base <http://www.test.de/test> .
@prefix : <http://www.test.de/test#> .

# http://www.test.de/test#User1
:User1 a foaf:Person ;
    :hasFirstName :Max , :Dirk ;
    :hasLastName :Mustermann ;
    :says "my tet"@en , "ui a string value"^^xsd:string .

# http://www.test.de/test#User2
:User2 a foaf:Person ;
    :hasLastName :Mustermann .
"#;

#[derive(clap::Parser)]
#[command(name = "triplekit", version, about = "Load Turtle into an in-memory knowledge base")]
struct Cli {
    /// Turtle file to load; a built-in sample is used when omitted
    file: Option<PathBuf>,

    /// Codec options (YAML, or JSON for `.json` files)
    #[arg(long)]
    options: Option<PathBuf>,

    /// Knowledge base name
    #[arg(long, default_value = triplekit::rdf::DEFAULT_KB_NAME)]
    name: String,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    println!("triplekit v{}", triplekit::version());
    println!("==========================================");

    let options = match &cli.options {
        Some(path) => TurtleOptions::from_path(path)
            .with_context(|| format!("loading options from {}", path.display()))?,
        None => TurtleOptions::new()
            .with_substitute(true)
            .with_pretty_print(true),
    };
    let parser = TurtleParser::new(options);

    let text = match &cli.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => SAMPLE.to_string(),
    };

    let span = logging::logger("demo");
    let _guard = span.enter();

    let stmts = parser.unmarshal(&text).context("parsing Turtle")?;
    info!(statements = stmts.len(), "parsed");

    let mut kb = KnowledgeBase::new(cli.name);
    kb.insert(&stmts);

    print_graph_counts(&kb);

    let ttl = parser.marshal(kb.statements()).context("writing Turtle")?;
    println!("\n{}", ttl);
    Ok(())
}

fn print_graph_counts(kb: &KnowledgeBase) {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for stmt in kb.statements() {
        let graph = stmt
            .graph()
            .map_or_else(|| "-".to_string(), |g| g.to_string());
        *counts.entry(graph).or_default() += 1;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Graph", "Statements"]);
    for (graph, count) in &counts {
        table.add_row(vec![graph.clone(), count.to_string()]);
    }

    println!("\nKnowledge base '{}': {} statements", kb.name(), kb.len());
    println!("{table}");
}
