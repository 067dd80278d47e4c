use tracing::debug;

use crate::models::catalog::Course;
use crate::models::domain::Domain;

pub const DEFAULT_COURSE_LIMIT: usize = 5;

/// (name, provider, duration, rating, description)
const COURSE_LISTINGS: &[(&str, &str, &str, f32, &str)] = &[
    (
        "Modern React with Hooks and Context",
        "Udemy",
        "24 hours",
        4.8,
        "Learn to build modern React applications using hooks, context API, and more.",
    ),
    (
        "Advanced JavaScript Concepts",
        "Coursera",
        "32 hours",
        4.7,
        "Deep dive into advanced JavaScript concepts including closures, prototypes, and async patterns.",
    ),
    (
        "Next.js & React - The Complete Guide",
        "Udemy",
        "40 hours",
        4.9,
        "Build full-stack applications with React, Next.js, and related technologies.",
    ),
    (
        "TypeScript for Professionals",
        "Frontend Masters",
        "18 hours",
        4.6,
        "Master TypeScript and learn how to build type-safe applications.",
    ),
    (
        "CSS Grid and Flexbox for Responsive Layouts",
        "LinkedIn Learning",
        "12 hours",
        4.5,
        "Learn modern CSS techniques to create responsive and flexible layouts.",
    ),
    (
        "Node.js API Masterclass",
        "Udemy",
        "35 hours",
        4.7,
        "Build RESTful APIs with Node.js, Express, and MongoDB.",
    ),
    (
        "Web Performance Optimization",
        "Google Developers",
        "15 hours",
        4.4,
        "Learn techniques to optimize web applications for better performance.",
    ),
    (
        "Full Stack Web Development Bootcamp",
        "Codecademy",
        "80 hours",
        4.8,
        "Comprehensive course covering frontend and backend web development.",
    ),
    (
        "React Testing with Jest and React Testing Library",
        "TestingJS",
        "16 hours",
        4.6,
        "Learn how to write tests for your React applications.",
    ),
    (
        "GraphQL with Apollo Client",
        "egghead.io",
        "10 hours",
        4.5,
        "Build efficient APIs with GraphQL and integrate them with React using Apollo Client.",
    ),
];

/// First `limit` courses in catalog order.
/// The domain is accepted for API symmetry but does not filter the catalog.
pub fn get_courses(domain: Domain, limit: usize) -> Vec<Course> {
    debug!("Course recommendations for {domain}, limit {limit}");

    COURSE_LISTINGS
        .iter()
        .take(limit)
        .map(|&(name, provider, duration, rating, description)| Course {
            name: name.to_string(),
            provider: provider.to_string(),
            link: "#".to_string(),
            duration: duration.to_string(),
            rating,
            description: description.to_string(),
        })
        .collect()
}
