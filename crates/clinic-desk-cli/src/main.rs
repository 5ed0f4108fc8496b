//! Command-line front-end for the clinic desk.
//!
//! Thin presentation layer over `clinic-desk-core`: each subcommand maps to
//! one facade flow and prints its outcome. The patient session lives for a
//! single process, so `book` takes a CNIC and logs in first.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use clinic_desk_core::{
    BookingForm, ClinicConfig, ClinicDesk, DoctorRecord, RegistrationForm, NO_MATCH_MESSAGE,
};

#[derive(Parser)]
#[command(name = "clinic-desk", about = "Clinic directory, triage, and booking client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List doctor categories (backend merged with the local store)
    Categories,
    /// List doctors, either for one category or across all of them
    Doctors {
        #[arg(long)]
        category: Option<String>,
    },
    /// Suggest specialties and doctors for free-text symptoms
    Suggest {
        /// Symptom description
        text: Vec<String>,
    },
    /// Add a doctor to the local store
    AddDoctor {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        experience: u32,
        #[arg(long)]
        phone: String,
    },
    /// Register a new patient
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        father_name: String,
        #[arg(long)]
        cnic: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        age: u32,
        #[arg(long, default_value = "")]
        disease: String,
    },
    /// Log in by CNIC
    Login {
        #[arg(long)]
        cnic: String,
    },
    /// Book an appointment (logs in, then books)
    Book {
        #[arg(long)]
        cnic: String,
        #[arg(long)]
        doctor: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// HH:MM, 24-hour
        #[arg(long)]
        time: String,
        #[arg(long, default_value = "")]
        reason: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = ClinicConfig::load();
    let mut desk = ClinicDesk::open(&config)?;

    match cli.command {
        Command::Categories => {
            for category in desk.browse_categories() {
                println!("{category}");
            }
        }
        Command::Doctors { category } => {
            let doctors = match category {
                Some(category) => desk.doctors_in_category(&category),
                None => desk.all_doctors(),
            };
            if doctors.is_empty() {
                println!("No doctors found in this category.");
            }
            for doctor in doctors {
                print_doctor(&doctor);
            }
        }
        Command::Suggest { text } => {
            let groups = desk.suggest_doctors(&text.join(" "));
            if groups.is_empty() {
                println!("{NO_MATCH_MESSAGE}");
            }
            for group in groups {
                println!("{}:", group.specialty);
                for doctor in group.doctors {
                    println!("  {} ({} years)", doctor.name, doctor.experience);
                }
            }
        }
        Command::AddDoctor {
            name,
            category,
            experience,
            phone,
        } => {
            let mut doctor = DoctorRecord::new(name, category, experience);
            doctor.phone = phone;
            desk.add_doctor(doctor)?;
            println!("Doctor added successfully.");
        }
        Command::Register {
            name,
            father_name,
            cnic,
            phone,
            age,
            disease,
        } => {
            let patient_id = desk.register(&RegistrationForm {
                patient_name: name,
                father_name,
                cnic,
                phone,
                age,
                disease,
            })?;
            println!("Registration successful. Your Patient ID is {patient_id}");
        }
        Command::Login { cnic } => {
            let patient_id = desk.login(&cnic)?;
            println!("Login successful. Patient ID {patient_id}");
        }
        Command::Book {
            cnic,
            doctor,
            date,
            time,
            reason,
        } => {
            desk.login(&cnic)?;
            desk.book(&BookingForm {
                doctor_name: doctor,
                date,
                time,
                reason,
            })?;
            println!("Appointment booked successfully.");
        }
    }

    Ok(())
}

fn print_doctor(doctor: &DoctorRecord) {
    let phone = if doctor.phone.is_empty() {
        "N/A"
    } else {
        &doctor.phone
    };
    println!(
        "{} | {} | Experience: {} years | Contact: {}",
        doctor.name, doctor.category, doctor.experience, phone
    );
}
