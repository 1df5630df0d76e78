use serde::Deserialize;
use serde::Serialize;

/// A mentor/interviewer profile from the directory. Read-only seed data; the
/// accounts themselves live with an external collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mentor {
    pub id: u32,
    pub name: String,
    pub package: String,
    pub company: String,
    pub role: String,
    pub skills: String,
    pub bio: String,
    pub image: String,
}

impl Mentor {
    pub fn directory() -> Vec<Mentor> {
        return vec![
            Mentor {
                id: 1,
                name: "Aman Gupta".to_string(),
                package: "45 LPA".to_string(),
                company: "Google".to_string(),
                role: "Senior Software Engineer".to_string(),
                skills: "System Design, Java, Microservices".to_string(),
                bio: "Ex-Amazon, helped 200+ students crack FAANG interviews".to_string(),
                image: "https://randomuser.me/api/portraits/men/32.jpg".to_string(),
            },
            Mentor {
                id: 2,
                name: "Priya Sharma".to_string(),
                package: "52 LPA".to_string(),
                company: "Microsoft".to_string(),
                role: "Principal Engineer".to_string(),
                skills: "React, TypeScript, Cloud Architecture".to_string(),
                bio: "Mentored 150+ students to top tech roles".to_string(),
                image: "https://randomuser.me/api/portraits/women/44.jpg".to_string(),
            },
            Mentor {
                id: 3,
                name: "Rahul Verma".to_string(),
                package: "38 LPA".to_string(),
                company: "Atlassian".to_string(),
                role: "Staff Engineer".to_string(),
                skills: "Backend, Distributed Systems, Leadership".to_string(),
                bio: "Ex-Flipkart, passionate about teaching DSA".to_string(),
                image: "https://randomuser.me/api/portraits/men/45.jpg".to_string(),
            },
        ];
    }

    pub fn find(id: u32) -> Option<Mentor> {
        return Mentor::directory().into_iter().find(|e| return e.id == id);
    }
}
