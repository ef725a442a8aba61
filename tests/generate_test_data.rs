use std::fs::File;
use std::io::{BufWriter, Write};

fn generate_text_file(path: &str, num_lines: usize, line_width: usize) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for i in 0..num_lines {
        let padding = "x".repeat(line_width.saturating_sub(16) + i % 7);
        writeln!(writer, "line {:>8} {}", i, padding)?;

        // Flush periodically to avoid memory buildup
        if i % 10_000 == 0 {
            writer.flush()?;
            print!("\rGenerated {} lines...", i);
            std::io::stdout().flush()?;
        }
    }

    writer.flush()?;
    println!("\rGenerated {} lines successfully!", num_lines);

    Ok(())
}

fn main() {
    println!("Viewer Test Data Generator");
    println!("==========================\n");

    println!("Generating small.txt (~1MB)...");
    if let Err(e) = generate_text_file("tests/small.txt", 12_000, 80) {
        eprintln!("Error generating small.txt: {}", e);
    }

    println!("\nGenerating medium.txt (~100MB)...");
    if let Err(e) = generate_text_file("tests/medium.txt", 1_200_000, 80) {
        eprintln!("Error generating medium.txt: {}", e);
    }

    println!("\n\nAll test files generated successfully!");
    println!("Files created:");
    println!("  - tests/small.txt  (~1MB)");
    println!("  - tests/medium.txt (~100MB)");
}
