use super::Priority;

struct CategoryActions {
    keys: &'static [&'static str],
    high: &'static [&'static str],
    medium: &'static [&'static str],
    low: &'static [&'static str],
}

const CATALOG: &[CategoryActions] = &[
    CategoryActions {
        keys: &["security", "security and compliance", "cybersecurity"],
        high: &[
            "Establish an enterprise identity and access management program with MFA everywhere",
            "Stand up a vulnerability management process with defined remediation SLAs",
            "Define and publish baseline security policies and data classification standards",
            "Centralize security logging and alerting into a monitored SIEM",
            "Run a third-party security assessment and fund the resulting remediation roadmap",
        ],
        medium: &[
            "Automate security scanning in build and deployment pipelines",
            "Formalize incident response runbooks and rehearse them quarterly",
            "Extend least-privilege reviews to service accounts and secrets",
        ],
        low: &[
            "Adopt continuous compliance monitoring against the control framework",
            "Introduce threat modeling for new architecture decisions",
            "Track security posture metrics on the executive dashboard",
        ],
    },
    CategoryActions {
        keys: &["reliability", "resilience", "availability"],
        high: &[
            "Define service level objectives for every business-critical system",
            "Eliminate single points of failure in core infrastructure",
            "Implement tested backup and restore procedures with documented RTO/RPO",
            "Introduce centralized monitoring with on-call escalation",
            "Create a disaster recovery plan and schedule the first failover exercise",
        ],
        medium: &[
            "Automate health checks and self-healing for stateless services",
            "Adopt blameless post-incident reviews with tracked action items",
            "Load test critical paths ahead of seasonal peaks",
        ],
        low: &[
            "Introduce controlled chaos experiments in pre-production",
            "Manage error budgets to balance release velocity and stability",
            "Expand multi-region redundancy for tier-one workloads",
        ],
    },
    CategoryActions {
        keys: &["performance", "performance efficiency", "scalability"],
        high: &[
            "Baseline response times and throughput for all customer-facing systems",
            "Instrument applications with distributed tracing",
            "Identify and remediate the top capacity bottlenecks",
            "Establish a capacity planning cadence tied to business forecasts",
            "Define performance acceptance criteria for new releases",
        ],
        medium: &[
            "Introduce caching and asynchronous processing where latency budgets are exceeded",
            "Automate horizontal scaling policies for variable workloads",
            "Add performance regression tests to the delivery pipeline",
        ],
        low: &[
            "Continuously right-size compute against observed utilization",
            "Benchmark against industry peers and publish targets",
            "Evaluate emerging platform services for efficiency gains",
        ],
    },
    CategoryActions {
        keys: &["cost", "cost optimization", "finops", "financial management"],
        high: &[
            "Tag every resource with owner, application, and cost center",
            "Establish monthly cost reviews with accountable budget owners",
            "Decommission idle and orphaned infrastructure",
            "Create a showback report per business unit",
            "Define a procurement policy for commitments and licensing",
        ],
        medium: &[
            "Purchase reserved capacity for steady-state workloads",
            "Automate shutdown schedules for non-production environments",
            "Set anomaly alerts on spend trends",
        ],
        low: &[
            "Move from showback to chargeback for shared platforms",
            "Optimize storage tiers with lifecycle policies",
            "Embed unit-cost metrics into product planning",
        ],
    },
    CategoryActions {
        keys: &["operational excellence", "operations", "devops"],
        high: &[
            "Document operational ownership for every production system",
            "Introduce version control and peer review for all infrastructure changes",
            "Establish a change management process with rollback plans",
            "Build a CI/CD pipeline for the most frequently changed applications",
            "Create runbooks for the top recurring operational incidents",
        ],
        medium: &[
            "Adopt infrastructure as code across environments",
            "Measure deployment frequency and change failure rate",
            "Automate routine operational tasks with self-service tooling",
        ],
        low: &[
            "Run game days to validate operational readiness",
            "Share operational metrics transparently across teams",
            "Continuously refine runbooks from incident learnings",
        ],
    },
    CategoryActions {
        keys: &["governance", "architecture governance", "strategy"],
        high: &[
            "Charter an architecture review board with clear decision rights",
            "Publish target-state architecture principles and standards",
            "Build an inventory of applications, owners, and lifecycle status",
            "Align the architecture roadmap with funded business priorities",
            "Introduce architecture decision records for significant changes",
        ],
        medium: &[
            "Track technology debt with remediation owners and dates",
            "Define reference architectures for common solution patterns",
            "Measure standards compliance in the review process",
        ],
        low: &[
            "Automate architecture conformance checks",
            "Review principles annually against business strategy",
            "Mentor delivery teams as architecture champions",
        ],
    },
    CategoryActions {
        keys: &["data", "data management", "data and analytics"],
        high: &[
            "Appoint data owners and stewards for critical data domains",
            "Define a data quality framework with measurable rules",
            "Catalog authoritative data sources and their consumers",
            "Establish retention and privacy controls for regulated data",
            "Consolidate duplicate master data stores",
        ],
        medium: &[
            "Automate data quality monitoring in ingestion pipelines",
            "Publish a business glossary and lineage for key reports",
            "Standardize integration patterns for data sharing",
        ],
        low: &[
            "Offer governed self-service analytics",
            "Track data product adoption and satisfaction",
            "Introduce data contracts between producing and consuming teams",
        ],
    },
];

const GENERIC_HIGH: &[&str] = &[
    "Assess current capabilities and document the gaps against target practices",
    "Assign an accountable owner and fund a prioritized improvement roadmap",
    "Establish baseline policies, standards, and measurements",
];

const GENERIC_MEDIUM: &[&str] = &[
    "Standardize the practices that already work across all teams",
    "Automate repetitive processes and track adoption metrics",
    "Review progress quarterly against defined targets",
];

const GENERIC_LOW: &[&str] = &[
    "Continuously measure and refine established practices",
    "Benchmark against industry leaders",
    "Share lessons learned across the organization",
];

/// Look up actions for a pillar category; uncatalogued categories get the
/// generic list for the priority.
pub(crate) fn actions_for(category: &str, priority: Priority) -> &'static [&'static str] {
    let key = normalize_category(category);
    let entry = CATALOG
        .iter()
        .find(|entry| entry.keys.iter().any(|candidate| *candidate == key));

    match (entry, priority) {
        (Some(entry), Priority::High) => entry.high,
        (Some(entry), Priority::Medium) => entry.medium,
        (Some(entry), Priority::Low) => entry.low,
        (None, Priority::High) => GENERIC_HIGH,
        (None, Priority::Medium) => GENERIC_MEDIUM,
        (None, Priority::Low) => GENERIC_LOW,
    }
}

fn normalize_category(raw: &str) -> String {
    raw.trim()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_lookup_ignores_case_and_separators() {
        assert_eq!(
            actions_for("Cost_Optimization", Priority::Medium),
            actions_for("cost optimization", Priority::Medium)
        );
        assert_eq!(actions_for("  SECURITY ", Priority::High).len(), 5);
    }

    #[test]
    fn unknown_category_falls_back_to_generic_three_items() {
        for priority in [Priority::High, Priority::Medium, Priority::Low] {
            assert_eq!(actions_for("Quantum Readiness", priority).len(), 3);
        }
    }
}
