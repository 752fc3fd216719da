use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "employee-cli")]
#[command(about = "Command-line client for the employee proxy", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8111")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every employee
    List,
    /// Find employees whose name contains a fragment
    Search { fragment: String },
    /// Show one employee
    Get { id: String },
    /// Show the highest salary
    HighestSalary,
    /// Show the ten best paid employee names
    TopEarners,
    /// Create an employee
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        salary: i64,
        #[arg(long)]
        age: i64,
        #[arg(long)]
        title: String,
    },
    /// Delete an employee by id
    Delete { id: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = format!("{}/employees", cli.url.trim_end_matches('/'));

    let request = match cli.command {
        Commands::List => client.get(&base),
        Commands::Search { fragment } => client.get(format!("{}/search/{}", base, fragment)),
        Commands::Get { id } => client.get(format!("{}/{}", base, id)),
        Commands::HighestSalary => client.get(format!("{}/highest-salary", base)),
        Commands::TopEarners => client.get(format!("{}/top-10-salaries", base)),
        Commands::Create {
            name,
            salary,
            age,
            title,
        } => client.post(&base).json(&json!({
            "name": name,
            "salary": salary,
            "age": age,
            "title": title,
        })),
        Commands::Delete { id } => client.delete(format!("{}/{}", base, id)),
    };

    print_response(request.send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    if !status.is_success() {
        eprintln!("Error: employee proxy returned status {}", status);
        eprintln!("Response: {}", text);
        return Ok(());
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
