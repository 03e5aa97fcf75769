//! Demo directory content for fresh installs.

use crate::model::person::NewPerson;
use crate::repo::person_repo::PersonRepository;
use crate::service::error::ServiceError;
use crate::service::person_service::PersonService;
use log::info;

const DEMO_HACKERS: &[(&str, &str, &[&str])] = &[
    (
        "Alex Chen",
        "https://alexchen.berkeley.edu",
        &["Quantum Computing", "Blockchain", "AI"],
    ),
    (
        "Jordan Taylor",
        "https://jtaylor.berkeley.edu",
        &["Cybersecurity", "Open Source", "Linux"],
    ),
    (
        "Sam Rodriguez",
        "https://samrodriguez.berkeley.edu",
        &["Robotics", "Machine Learning", "IoT"],
    ),
    (
        "Morgan Lee",
        "https://morganlee.berkeley.edu",
        &["Web3", "Distributed Systems", "Privacy"],
    ),
    (
        "Taylor Johnson",
        "https://tjohnson.berkeley.edu",
        &["Game Development", "AR/VR", "Computer Graphics"],
    ),
    (
        "Casey Williams",
        "https://caseyw.berkeley.edu",
        &["Mobile Development", "UX Design", "Accessibility"],
    ),
    (
        "Riley Patel",
        "https://rpatel.berkeley.edu",
        &["Systems Programming", "Compilers", "Low-level Optimization"],
    ),
    (
        "Jamie Garcia",
        "https://jamieg.berkeley.edu",
        &["Network Security", "Ethical Hacking", "Bug Bounty"],
    ),
];

/// Returns the demo entries as insert payloads.
pub fn demo_people() -> Vec<NewPerson> {
    DEMO_HACKERS
        .iter()
        .map(|(name, url, interests)| NewPerson {
            name: (*name).to_string(),
            url: Some((*url).to_string()),
            interests: interests.iter().map(|tag| (*tag).to_string()).collect(),
            bio: None,
        })
        .collect()
}

/// Inserts the demo directory when the store holds no entries.
///
/// Returns the number of inserted entries (0 when the store was not empty).
pub fn seed_demo_directory<R: PersonRepository>(
    service: &PersonService<R>,
) -> Result<usize, ServiceError> {
    if !service.list_persons()?.is_empty() {
        info!("event=seed module=service status=skipped reason=not_empty");
        return Ok(0);
    }

    let people = demo_people();
    for person in &people {
        service.add_person(person)?;
    }
    info!("event=seed module=service status=ok inserted={}", people.len());
    Ok(people.len())
}
