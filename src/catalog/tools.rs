// catalog/tools.rs - Tool table: RTCF parts, schemas, simulated examples, lesson copy
//
// Entries are ordered exactly like `ToolId` so the table can be indexed by discriminant.

use super::*;

pub(super) static TOOLS: [ToolSpec; 12] = [
    // --- Module 1: Drafting ---
    ToolSpec {
        id: ToolId::ReplyWizard,
        module: LabModule::Drafting,
        label: "Diplomacy Engine",
        icon: "🪄",
        role: "Expert Professional Communicator",
        task: "Draft a concise email reply with a stance of: {{stance}}.",
        context_lead: "The user is replying to:",
        format: "A JSON object containing the 'reply' string.",
        schema: reply_schema,
        simulated: reply_simulated,
        lesson: Lesson {
            title: "The Diplomacy Engine",
            role_description: "An Expert Relationship Manager who balances firm boundaries with professional warmth.",
            lesson: "Avoid using the verb 'Write' (too passive). 'Draft' tells the AI this is a high-stakes document that needs careful wording.",
            anatomy: TaskAnatomy {
                verb: "Draft",
                instruction: "Professional response matching a specific stance",
                constraints: "Relationship priority + Firm position",
                why_it_works: "'Draft' primes the AI to use more formal syntax compared to 'write'.",
            },
            example_prompts: &[
                "Draft a professional reply with a stance of \"Agree\". Priority: Maintain the relationship while being firm on our position.",
                "Act as an Expert Negotiator. Draft a response that declines the request but keeps the door open for future collaboration.",
                "Compose a professional email draft that addresses the concerns raised while maintaining a stance of \"Negotiate\".",
            ],
            workplace_benefit: "Say 'No' to a client while making them feel heard. The anatomy stops the AI from being overly apologetic, the #1 mistake junior staff make in emails.",
            tip: "When prompt engineering for email, always define the relationship priority. Is it a long-term client or a one-off vendor?",
            strategy: "Apply this logic to Slack or Teams when you need to redirect a project without hurting your colleague's feelings.",
        },
    },
    ToolSpec {
        id: ToolId::SubjectLines,
        module: LabModule::Drafting,
        label: "Priority Signals",
        icon: "🏷️",
        role: "Email Marketing Strategist",
        task: "Generate 5 high-open-rate subject lines.",
        context_lead: "Based on this email body:",
        format: "JSON object with 'suggestions' array.",
        schema: subject_schema,
        simulated: subject_simulated,
        lesson: Lesson {
            title: "Priority Signal Lab",
            role_description: "A Direct Response Copywriter obsessed with human attention spans and click-through psychology.",
            lesson: "Generic subject tasks fail because they lack 'Variability'. Force the AI to provide 5 distinct psychological hooks.",
            anatomy: TaskAnatomy {
                verb: "Generate",
                instruction: "5 High-impact subject lines",
                constraints: "Mix 3 styles + Under 50 chars",
                why_it_works: "'Generate' combined with 'Styles' forces the AI to diverge its creative paths.",
            },
            example_prompts: &[
                "Generate 5 high-impact subject lines. Mix urgency, curiosity, and utility styles. Keep them under 50 characters.",
                "As a senior marketing strategist, create 3 subject line options that trigger immediate curiosity.",
                "Identify the core value proposition of this email and generate a subject line that highlights it with urgency.",
            ],
            workplace_benefit: "Standard emails get lost. Curiosity hooks make your email stand out in a crowded executive inbox.",
            tip: "A good subject line prompt should always include a character limit. Executive screens cut off text after ~45 characters.",
            strategy: "Use the 'Utility' style for internal updates and 'Urgency' for deadline-sensitive requests.",
        },
    },
    ToolSpec {
        id: ToolId::Summarizer,
        module: LabModule::Drafting,
        label: "Noise Filter",
        icon: "📋",
        role: "Executive Assistant",
        task: "Extract a TL;DR summary and the single most critical action item.",
        context_lead: "Analyze this thread:",
        format: "JSON object with 'summary' and 'actionItem'.",
        schema: summary_schema,
        simulated: summary_simulated,
        lesson: Lesson {
            title: "Noise Filter 9000",
            role_description: "An Executive Chief of Staff who values time above all else and hates fluff.",
            lesson: "Summaries are often too long. The verb 'Extract' changes the AI's internal logic from 'generative' to 'analytical'.",
            anatomy: TaskAnatomy {
                verb: "Extract",
                instruction: "Core message + Action Item",
                constraints: "Exactly one item + Ignore pleasantries",
                why_it_works: "'Extract' focuses the model on entity identification, reducing hallucination.",
            },
            example_prompts: &[
                "Extract the core message (TL;DR) and exactly one MUST-DO action item. Ignore pleasantries.",
                "Identify the single most important next step from this email thread. Be concise.",
                "Strip all the corporate fluff and extract only the factual updates and pending approvals.",
            ],
            workplace_benefit: "Turns a 50-email chain into a single sentence. Ideal for catching up after a holiday.",
            tip: "Adding 'Ignore pleasantries' is the pro way to skip 90% of the useless content in modern emails.",
            strategy: "Save this as a system prompt in your AI tool of choice. Every time you get a long thread, 'Extract' the truth.",
        },
    },
    // --- Module 2: Tone ---
    ToolSpec {
        id: ToolId::ToneAnalysis,
        module: LabModule::Tone,
        label: "Comm Auditor",
        icon: "📊",
        role: "Linguistic Psychologist",
        task: "Score the email on Warmth and Professionalism (0-100).",
        context_lead: "Target text:",
        format: "JSON with 'warmth', 'professionalism', 'improvement'.",
        schema: tone_schema,
        simulated: tone_simulated,
        lesson: Lesson {
            title: "The Communications Auditor",
            role_description: "A Linguistic Psychologist who measures the impact of written words on corporate relationships.",
            lesson: "To measure tone, quantify it. A hard metric (0-100) makes communication performance visible.",
            anatomy: TaskAnatomy {
                verb: "Score",
                instruction: "Quantify Warmth + Professionalism",
                constraints: "0-100 Range + 1 Actionable fix",
                why_it_works: "'Score' stops the AI from being 'nice' and forces it to act as a cold measurement device.",
            },
            example_prompts: &[
                "Score the following text on 2 dimensions (0-100): Warmth and Professionalism. Provide 1 actionable fix.",
                "As a Communications Auditor, evaluate this email draft for passive-aggression. Assign a score for 'Empathy'.",
                "Identify the tone of this message and provide a numerical score for how 'Encouraging' it sounds to a direct report.",
            ],
            workplace_benefit: "Before hitting send on a message to your boss, this lab tells you if you sound passive-aggressive.",
            tip: "Providing 'Dimensions' (X vs Y) is the best way to get a balanced AI critique.",
            strategy: "Keep professionalism above 80% and warmth above 40% for internal messages to senior leadership.",
        },
    },
    ToolSpec {
        id: ToolId::EmpathyRewrite,
        module: LabModule::Tone,
        label: "The Humanizer",
        icon: "❤️",
        role: "Empathy Coach",
        task: "Rewrite text to be warmer while staying professional.",
        context_lead: "Original text:",
        format: "JSON with 'output' string.",
        schema: empathy_schema,
        simulated: empathy_simulated,
        lesson: Lesson {
            title: "The Humanizer",
            role_description: "A specialist in high-empathy communication who understands how to soften corporate bluntness.",
            lesson: "To change a vibe, use the verb 'Infuse'. It keeps the skeleton of the facts but wraps them in new emotional skin.",
            anatomy: TaskAnatomy {
                verb: "Infuse",
                instruction: "Add warmth + Understanding",
                constraints: "Preserve facts + No over-apologizing",
                why_it_works: "'Infuse' maintains the core business facts while modifying the linguistic 'texture'.",
            },
            example_prompts: &[
                "Infuse the message with warmth and understanding. Acknowledge the recipient's likely feelings without over-apologizing.",
                "Rewrite this project update to sound more supportive and human-centric. Do not change the timeline data.",
                "Add emotional warmth to this rejection email while maintaining clear professional boundaries.",
            ],
            workplace_benefit: "Turn cold project updates into collaborative messages without over-apologizing.",
            tip: "Avoid 'Make it nicer'. Use 'Infuse with empathy' for a much higher quality of linguistic output.",
            strategy: "Use this when you have to miss a deadline, so you sound like a human who cares rather than a robot making excuses.",
        },
    },
    ToolSpec {
        id: ToolId::ClarityCheck,
        module: LabModule::Tone,
        label: "Jargon Detox",
        icon: "🔍",
        role: "Plain Language Editor",
        task: "Identify corporate jargon and provide simpler alternatives.",
        context_lead: "Text:",
        format: "JSON with 'jargonFound' array and 'readabilityScore'.",
        schema: clarity_schema,
        simulated: clarity_simulated,
        lesson: Lesson {
            title: "The Jargon Detox",
            role_description: "A Plain Language Consultant focused on radical clarity and internal team alignment.",
            lesson: "Clarity prompts require a 'Comparative Constraint'. 'Identify and Replace' shows exactly what was fixed.",
            anatomy: TaskAnatomy {
                verb: "Identify",
                instruction: "Spot jargon + Provide Simpler versions",
                constraints: "12-year-old level + Readability score",
                why_it_works: "'Identify' turns the prompt into a two-step logic gate: find then fix.",
            },
            example_prompts: &[
                "Identify words that a 12-year-old wouldn't understand. Replace them with simpler alternatives. Score readability.",
                "Strip all technical jargon from this email and rewrite it for a general audience. Provide a list of changes made.",
                "Analyze this memo for 'Business Speak' and simplify it so a new hire can understand it instantly.",
            ],
            workplace_benefit: "Translate corporate-speak into actual work and cut errors caused by misread instructions.",
            tip: "Using an age constraint (like 12-year-old) is the gold standard for simple workplace communication.",
            strategy: "Apply this to internal onboarding documents so new hires actually understand their roles.",
        },
    },
    // --- Module 3: Crisis ---
    ToolSpec {
        id: ToolId::CrisisShield,
        module: LabModule::Crisis,
        label: "De-escalation Shield",
        icon: "🛡️",
        role: "Conflict Resolution Specialist",
        task: "Analyze psychological triggers and draft a de-escalation reply.",
        context_lead: "Angry email:",
        format: "JSON with 'psychologicalInsights' array and 'responseDraft'.",
        schema: shield_schema,
        simulated: shield_simulated,
        lesson: Lesson {
            title: "The De-escalation Shield",
            role_description: "A Conflict Resolution Specialist trained in hostile client management and high-stakes negotiation.",
            lesson: "When handling anger, use the 'Analyze before Acting' pattern so the AI processes the emotion before generating words.",
            anatomy: TaskAnatomy {
                verb: "Analyze",
                instruction: "Identify triggers + affirmation draft",
                constraints: "Preserve facts + Avoid liability",
                why_it_works: "Forces 'Chain of Thought' reasoning which prevents shallow, generic apologies.",
            },
            example_prompts: &[
                "Phase 1: Map the emotional triggers. Phase 2: Draft a de-escalation response that is firm but empathetic.",
                "Analyze the hidden needs in this complaint. Respond by addressing the core issue first, then the emotion.",
                "Act as a Crisis Specialist. Draft a response that lowers the emotional temperature by 50% without giving a refund yet.",
            ],
            workplace_benefit: "Turn hostile threads into productive outcomes by using AI as a cognitive filter for your own frustration.",
            tip: "Separating 'Analysis' from 'Response' grounds the final draft in logic, not reaction.",
            strategy: "Use this when your instinct is to be defensive. It keeps you professional.",
        },
    },
    ToolSpec {
        id: ToolId::Escalation,
        module: LabModule::Crisis,
        label: "Risk Heatmap",
        icon: "🔥",
        role: "Legal Risk Analyst",
        task: "Assign risk level and identify linguistic triggers for escalation.",
        context_lead: "Text:",
        format: "JSON with 'riskLevel', 'triggers', 'advice'.",
        schema: escalation_schema,
        simulated: escalation_simulated,
        lesson: Lesson {
            title: "The Risk Heatmap",
            role_description: "A Corporate Risk Auditor trained to spot litigation threats and passive-aggressive patterns early.",
            lesson: "Use 'Linguistic Pattern Matching' to hunt for red-flag phrases that signal a move from 'upset' to 'legal threat'.",
            anatomy: TaskAnatomy {
                verb: "Audit",
                instruction: "Classify risk + Pinpoint triggers",
                constraints: "Legal risk focus + Actionable advice",
                why_it_works: "Categorization prompts help standardize how your team handles complaints across the board.",
            },
            example_prompts: &[
                "Audit this text for litigation risk. Identify every sentence that sounds like a legal threat.",
                "Classify the escalation risk of this thread. Provide advice for a junior manager on how to respond.",
                "Identify passive-aggressive linguistic markers and score the escalation potential.",
            ],
            workplace_benefit: "Flag high-risk emails for management review before they blow up on social media or in court.",
            tip: "Linguistic markers are the 'early warning system' for your business reputation.",
            strategy: "If the AI scores a 'High' risk, immediately BCC your legal or PR team.",
        },
    },
    ToolSpec {
        id: ToolId::RootCause,
        module: LabModule::Crisis,
        label: "Root Cause",
        icon: "🪵",
        role: "Operations Consultant",
        task: "Identify structural business failures causing this complaint.",
        context_lead: "Complaint:",
        format: "JSON with 'causes' array and 'structuralFix'.",
        schema: root_cause_schema,
        simulated: root_cause_simulated,
        lesson: Lesson {
            title: "The Root Cause Analyst",
            role_description: "A Lean Process Expert who looks past the drama to fix the machine behind the mistake.",
            lesson: "Ignore the emotion entirely. Use 'Systems Extraction' to find out what actually broke in your workflow.",
            anatomy: TaskAnatomy {
                verb: "Isolate",
                instruction: "System failure identification + Process fix",
                constraints: "No emotional content + 1 Structural recommendation",
                why_it_works: "Instructional 'Filtering' removes noise and forces the model into 'Consultant Mode'.",
            },
            example_prompts: &[
                "Ignore the client's tone. Identify the specific operational failure that caused this complaint.",
                "Extract the business logic failure from this thread. Suggest a process change to prevent recurrence.",
                "Act as an Ops Consultant. Analyze this complaint to find the bottleneck in our communication funnel.",
            ],
            workplace_benefit: "Stop fixing people, start fixing processes. Every complaint becomes a 'Lesson Learned'.",
            tip: "Instructions like 'Ignore the anger' are known as Attention Guidance prompts.",
            strategy: "Use this during your weekly operations review. It's the most objective way to analyze failures.",
        },
    },
    // --- Module 4: Admin ---
    ToolSpec {
        id: ToolId::Meeting,
        module: LabModule::Admin,
        label: "Scheduling Engine",
        icon: "🗓️",
        role: "Professional Scheduler",
        task: "Extract proposed slots and write a summary.",
        context_lead: "Thread:",
        format: "JSON with 'proposedSlots' and 'confirmationMessage'.",
        schema: meeting_schema,
        simulated: meeting_simulated,
        lesson: Lesson {
            title: "The Scheduling Engine",
            role_description: "An Ultra-Efficient Administrative Chief focused on data normalization and time optimization.",
            lesson: "Human scheduling talk is 'unstructured data'. Use the verb 'Normalize' or 'Parse' to turn it into structure.",
            anatomy: TaskAnatomy {
                verb: "Parse",
                instruction: "Identify dates/times + confirmation summary",
                constraints: "Clean list format + One-sentence limit",
                why_it_works: "'Parse' focuses the AI on identifying entities (dates) rather than interpreting the mood.",
            },
            example_prompts: &[
                "Parse this thread and extract all proposed meeting times. Output as a bulleted list.",
                "Identify all scheduling conflicts in this chain. Suggest a single time that works for everyone.",
                "Normalize these messy calendar notes into a standard ISO format list.",
            ],
            workplace_benefit: "Eliminate the 'When works for you?' dance and book the meeting in seconds.",
            tip: "Combining 'Identify' with 'Confirmation' gives you the data AND the response in one go.",
            strategy: "Use this when you get back from vacation to clear all the 'Let's meet' emails in one pass.",
        },
    },
    ToolSpec {
        id: ToolId::Tasks,
        module: LabModule::Admin,
        label: "Task Extractor",
        icon: "✅",
        role: "Project Manager",
        task: "Extract task list and prioritize them.",
        context_lead: "Thread:",
        format: "JSON with 'tasks' array (task, priority).",
        schema: tasks_schema,
        simulated: tasks_simulated,
        lesson: Lesson {
            title: "The Task Extractor",
            role_description: "A Project Manager obsessed with 'Actionable Items' and clear team accountability.",
            lesson: "To word a project task, use 'Extract and Rank'. The AI has to evaluate importance, not just list keywords.",
            anatomy: TaskAnatomy {
                verb: "Extract",
                instruction: "Action items + Priority levels",
                constraints: "Concise items + Tri-level priority",
                why_it_works: "'Rank' or 'Prioritize' triggers the AI's logical evaluation of project impact.",
            },
            example_prompts: &[
                "Extract every actionable task from this meeting transcript. Rank by High/Med/Low priority.",
                "Identify who is responsible for each task in this thread. Create a table of responsibilities.",
                "Summarize this project update as a Checklist of 5 immediate next steps.",
            ],
            workplace_benefit: "Turn chatter into checklists so nobody assumes someone else is doing it.",
            tip: "Always ask for 'Priority'. It forces the AI to look for cues like 'urgent' or 'by EOD'.",
            strategy: "Paste your Monday morning inbox into this. It builds your week's schedule for you.",
        },
    },
    ToolSpec {
        id: ToolId::OutOfOffice,
        module: LabModule::Admin,
        label: "Boundary Crafter",
        icon: "🌴",
        role: "Corporate Communications Manager",
        task: "Draft a professional OOO auto-responder.",
        context_lead: "Context:",
        format: "JSON with 'message'.",
        schema: ooo_schema,
        simulated: ooo_simulated,
        lesson: Lesson {
            title: "The Boundary Crafter",
            role_description: "A Corporate Communications Manager who specializes in professional detachment and boundary setting.",
            lesson: "OOO prompts are all about 'Entity Scoping'. Provide the dates and the alternative contact as hard entities.",
            anatomy: TaskAnatomy {
                verb: "Construct",
                instruction: "Clear OOO message + Alternative contact",
                constraints: "Professional tone + Explicit boundary",
                why_it_works: "'Construct' suggests building a template with specific slots for data.",
            },
            example_prompts: &[
                "Construct a professional OOO message for these dates: [Date Range]. Alternative: [Sarah].",
                "Draft an OOO auto-responder that is friendly but firm about 'No exceptions'.",
                "Create a humor-tinged but professional OOO for a design team lead.",
            ],
            workplace_benefit: "Messages polite enough to keep your job, firm enough that nobody bothers you on vacation.",
            tip: "Define 'Emergency contact' as a mandatory field. It's the #1 reason OOO messages fail.",
            strategy: "Set this up once, then just swap the dates each time you're away.",
        },
    },
];

// --- Schemas ---

fn reply_schema() -> Schema {
    Schema::object([("reply", Schema::String)])
}

fn subject_schema() -> Schema {
    Schema::object([("suggestions", Schema::string_list())])
}

fn summary_schema() -> Schema {
    Schema::object([("summary", Schema::String), ("actionItem", Schema::String)])
}

fn tone_schema() -> Schema {
    Schema::object([
        ("warmth", Schema::Number),
        ("professionalism", Schema::Number),
        ("improvement", Schema::String),
    ])
}

fn empathy_schema() -> Schema {
    Schema::object([("output", Schema::String)])
}

fn clarity_schema() -> Schema {
    Schema::object([
        (
            "jargonFound",
            Schema::array(Schema::object([
                ("original", Schema::String),
                ("simpler", Schema::String),
            ])),
        ),
        ("readabilityScore", Schema::Number),
    ])
}

fn shield_schema() -> Schema {
    Schema::object([
        ("psychologicalInsights", Schema::string_list()),
        ("responseDraft", Schema::String),
    ])
}

fn escalation_schema() -> Schema {
    Schema::object([
        ("riskLevel", Schema::String),
        ("triggers", Schema::string_list()),
        ("advice", Schema::String),
    ])
}

fn root_cause_schema() -> Schema {
    Schema::object([
        ("causes", Schema::string_list()),
        ("structuralFix", Schema::String),
    ])
}

fn meeting_schema() -> Schema {
    Schema::object([
        ("proposedSlots", Schema::string_list()),
        ("confirmationMessage", Schema::String),
    ])
}

fn tasks_schema() -> Schema {
    Schema::object([(
        "tasks",
        Schema::array(Schema::object([
            ("task", Schema::String),
            ("priority", Schema::String),
        ])),
    )])
}

fn ooo_schema() -> Schema {
    Schema::object([("message", Schema::String)])
}

// --- Simulated examples (served when no API key is configured) ---

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn reply_simulated(stance: ReplyStance) -> ToolOutput {
    ToolOutput::ReplyWizard(ReplyWizardResult {
        reply: format!(
            "Simulation: Replying to the request with an {} stance. \"I've reviewed your request and I'm happy to {}...\"",
            stance.as_str(),
            stance.as_str().to_lowercase()
        ),
    })
}

fn subject_simulated(_: ReplyStance) -> ToolOutput {
    ToolOutput::SubjectLines(SubjectLineResult {
        suggestions: strings(&[
            "Urgent: Update Needed",
            "Follow-up on Project",
            "Quick question?",
            "Draft Proposal",
            "Meeting Sync",
        ]),
    })
}

fn summary_simulated(_: ReplyStance) -> ToolOutput {
    ToolOutput::Summarizer(SummarizerResult {
        summary: "Discussion regarding Q4 budget cuts.".to_string(),
        action_item: "Confirm final numbers by Friday.".to_string(),
    })
}

fn tone_simulated(_: ReplyStance) -> ToolOutput {
    ToolOutput::ToneAnalysis(ToneAnalysis {
        warmth: 60.0,
        professionalism: 85.0,
        improvement: "Add a greeting.".to_string(),
    })
}

fn empathy_simulated(_: ReplyStance) -> ToolOutput {
    ToolOutput::EmpathyRewrite(RewriteResult {
        output: "I really appreciate your patience while we work on this...".to_string(),
    })
}

fn clarity_simulated(_: ReplyStance) -> ToolOutput {
    ToolOutput::ClarityCheck(ClarityResult {
        jargon_found: vec![JargonSwap {
            original: "Leverage".to_string(),
            simpler: "Use".to_string(),
        }],
        readability_score: 70.0,
    })
}

fn shield_simulated(_: ReplyStance) -> ToolOutput {
    ToolOutput::CrisisShield(CrisisAnalysis {
        psychological_insights: strings(&["Feels unheard", "Anxious about money"]),
        response_draft: "I hear you...".to_string(),
    })
}

fn escalation_simulated(_: ReplyStance) -> ToolOutput {
    ToolOutput::Escalation(EscalationResult {
        risk_level: Level::Medium,
        triggers: strings(&["Legal action mention"]),
        advice: "Involve a manager.".to_string(),
    })
}

fn root_cause_simulated(_: ReplyStance) -> ToolOutput {
    ToolOutput::RootCause(RootCauseResult {
        causes: strings(&["Communication lag"]),
        structural_fix: "Hire a VA.".to_string(),
    })
}

fn meeting_simulated(_: ReplyStance) -> ToolOutput {
    ToolOutput::Meeting(MeetingExtraction {
        proposed_slots: strings(&["Tuesday 3pm"]),
        confirmation_message: "See you Tuesday.".to_string(),
    })
}

fn tasks_simulated(_: ReplyStance) -> ToolOutput {
    ToolOutput::Tasks(TaskExtraction {
        tasks: vec![TaskItem {
            task: "Send link".to_string(),
            priority: Level::High,
        }],
    })
}

fn ooo_simulated(_: ReplyStance) -> ToolOutput {
    ToolOutput::OutOfOffice(OutOfOfficeResult {
        message: "I am out of office...".to_string(),
    })
}
