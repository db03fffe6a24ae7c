use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use anyhow::{Context, bail};
    use clap::{Parser, Subcommand};
    use hamilton::Hamilton;

    #[derive(Debug, Parser)]
    #[command(about = "Evaluate Hamilton quaternion operations", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    /// Quaternion arguments are given as comma-separated components `a,b,c,d`.
    #[derive(Debug, Subcommand)]
    enum Command {
        /// Multiply two quaternions (in the given order)
        Mul {
            #[arg(allow_hyphen_values = true)]
            x: String,
            #[arg(allow_hyphen_values = true)]
            y: String,
        },
        /// Compute the commutator xy - yx
        Commutator {
            #[arg(allow_hyphen_values = true)]
            x: String,
            #[arg(allow_hyphen_values = true)]
            y: String,
        },
        /// Divide x by y from the right, x * y⁻¹
        Quo {
            #[arg(allow_hyphen_values = true)]
            x: String,
            #[arg(allow_hyphen_values = true)]
            y: String,
        },
        /// Compute the multiplicative inverse
        Inv {
            #[arg(allow_hyphen_values = true)]
            x: String,
        },
        /// Compute the conjugate
        Conj {
            #[arg(allow_hyphen_values = true)]
            x: String,
        },
        /// Compute the quadrance (squared norm)
        Quad {
            #[arg(allow_hyphen_values = true)]
            x: String,
        },
        /// Convert to hyperspherical coordinates
        Curv {
            #[arg(allow_hyphen_values = true)]
            x: String,
        },
        /// Create a quaternion from hyperspherical coordinates
        Rect {
            #[arg(allow_hyphen_values = true)]
            r: f64,
            #[arg(allow_hyphen_values = true)]
            theta1: f64,
            #[arg(allow_hyphen_values = true)]
            theta2: f64,
            #[arg(allow_hyphen_values = true)]
            theta3: f64,
        },
    }

    fn parse_hamilton(text: &str) -> Result<Hamilton> {
        let components = text
            .split(',')
            .map(|component| {
                component
                    .trim()
                    .parse::<f64>()
                    .with_context(|| format!("Invalid quaternion component `{component}`"))
            })
            .collect::<Result<Vec<_>>>()?;

        let [a, b, c, d] = components.as_slice() else {
            bail!(
                "Expected 4 comma-separated components, got {} in `{}`",
                components.len(),
                text
            );
        };
        let z = Hamilton::new(*a, *b, *c, *d);
        log::debug!("Parsed `{}` as {}", text, z);
        Ok(z)
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();

        match cli.command {
            Command::Mul { x, y } => {
                println!("{}", parse_hamilton(&x)? * parse_hamilton(&y)?);
            }
            Command::Commutator { x, y } => {
                println!("{}", parse_hamilton(&x)?.commutator(&parse_hamilton(&y)?));
            }
            Command::Quo { x, y } => {
                println!("{}", parse_hamilton(&x)?.quotient(&parse_hamilton(&y)?)?);
            }
            Command::Inv { x } => {
                println!("{}", parse_hamilton(&x)?.inverse()?);
            }
            Command::Conj { x } => {
                println!("{}", parse_hamilton(&x)?.conjugate());
            }
            Command::Quad { x } => {
                println!("{}", parse_hamilton(&x)?.quad());
            }
            Command::Curv { x } => {
                let coords = parse_hamilton(&x)?.curvilinear();
                println!(
                    "r = {}, θ1 = {}, θ2 = {}, θ3 = {}",
                    coords.r, coords.theta1, coords.theta2, coords.theta3
                );
            }
            Command::Rect {
                r,
                theta1,
                theta2,
                theta3,
            } => {
                println!(
                    "{}",
                    Hamilton::from_curvilinear(r, theta1, theta2, theta3)
                );
            }
        }
        Ok(())
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
