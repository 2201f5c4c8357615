//! Command-line interface for fakegen
//!
//! # Usage Examples
//!
//! ```bash
//! # Write Avro container files into the working directory (default)
//! fakegen --output fileavro --number 100000
//!
//! # Publish Confluent-Avro records to Kafka
//! fakegen --output kafkaavro \
//!   --brokers localhost:9092 \
//!   --schema-registry-url http://localhost:8081
//!
//! # Publish JSON records to Kafka, deterministically
//! fakegen --output kafkajson --seed 42 --number 5000
//! ```

use anyhow::Context;
use clap::{Parser, ValueEnum};
use fakegen_avro_file_sink::AvroFileSink;
use fakegen_generator::CorrelatedGenerator;
use fakegen_kafka_sink::{KafkaAvroSink, KafkaJsonSink};
use fakegen_sink::RecordSink;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputKind {
    /// Avro object container files in the output directory
    #[value(name = "fileavro")]
    FileAvro,
    /// JSON-encoded records on Kafka topics
    #[value(name = "kafkajson")]
    KafkaJson,
    /// Confluent-Avro-encoded records on Kafka topics
    #[value(name = "kafkaavro")]
    KafkaAvro,
}

#[derive(Parser)]
#[command(name = "fakegen")]
#[command(about = "Creates plausible fake data and outputs it in a variety of formats")]
struct Cli {
    /// Output format and transport
    #[arg(short, long, value_enum, default_value = "fileavro")]
    output: OutputKind,

    /// Number of access events to generate
    #[arg(short, long, default_value = "100000")]
    number: u64,

    /// Number of profiles seeded into the entity pool before generation
    #[arg(long, default_value = "1000")]
    seed_count: usize,

    /// Random seed for deterministic generation (same seed = same stream)
    #[arg(long)]
    seed: Option<u64>,

    /// Kafka brokers (kafkaavro and kafkajson outputs)
    #[arg(long, env = "KAFKA_BROKERS", default_value = "localhost:9092")]
    brokers: String,

    /// Confluent schema registry URL (kafkaavro output)
    #[arg(
        long,
        env = "SCHEMA_REGISTRY_URL",
        default_value = "http://localhost:8081"
    )]
    schema_registry_url: String,

    /// Directory the fileavro output writes its container files into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run_main().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run_main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut generator = match cli.seed {
        Some(seed) => CorrelatedGenerator::seeded(seed),
        None => CorrelatedGenerator::new(),
    };
    generator
        .seed_pool(cli.seed_count)
        .context("failed to seed the entity pool")?;

    let mut sink: Box<dyn RecordSink> = match cli.output {
        OutputKind::FileAvro => Box::new(
            AvroFileSink::open(&cli.out_dir).context("failed to open avro container files")?,
        ),
        OutputKind::KafkaAvro => Box::new(
            KafkaAvroSink::connect(&cli.brokers, &cli.schema_registry_url)
                .context("failed to create the kafka avro producer")?,
        ),
        OutputKind::KafkaJson => Box::new(
            KafkaJsonSink::connect(&cli.brokers)
                .context("failed to create the kafka json producer")?,
        ),
    };

    let run_result = fakegen::run(&mut generator, sink.as_mut(), cli.number).await;
    // Close on every exit path so buffered records are flushed even when the
    // run fails partway
    let close_result = sink.close().await.context("failed to close the sink");
    run_result.and(close_result)
}
