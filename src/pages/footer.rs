use yew::prelude::*;

struct SocialLink {
    href: &'static str,
    icon: &'static str,
    label: &'static str,
}

const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { href: "https://discord.com", icon: "/img/icons/discord.svg", label: "Discord" },
    SocialLink { href: "https://twitter.com", icon: "/img/icons/twitter.svg", label: "Twitter" },
    SocialLink { href: "https://youtube.com", icon: "/img/icons/youtube.svg", label: "YouTube" },
    SocialLink { href: "https://www.notion.so", icon: "/img/icons/notion.svg", label: "Notion" },
];

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer id="contact" class="site-footer">
            <style>
                {r#"
                    .site-footer { width: 100vw; background: #e3681c; padding: 1rem 0; color: #000; }
                    .footer-content {
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                        padding: 0 1rem;
                    }
                    .footer-content p, .footer-privacy { font-size: 0.875rem; font-weight: 300; text-align: center; }
                    .footer-social { display: flex; justify-content: center; gap: 1rem; }
                    .footer-social a { color: #000; transition: color 0.5s ease-in-out; }
                    .footer-social a:hover { color: #fff; }
                    .footer-social img { width: 1rem; height: 1rem; }
                    .footer-privacy { color: inherit; }
                    .footer-privacy:hover { text-decoration: underline; }
                    @media (min-width: 768px) {
                        .footer-content { flex-direction: row; }
                        .footer-content p { text-align: left; }
                        .footer-privacy { text-align: right; }
                    }
                "#}
            </style>
            <div class="footer-content">
                <p>{"©Zanimate 2024. All rights reserved"}</p>

                <div class="footer-social">
                    { for SOCIAL_LINKS.iter().map(|link| html! {
                        <a href={link.href} target="_blank" rel="noopener noreferrer" aria-label={link.label}>
                            <img src={link.icon} alt={link.label} />
                        </a>
                    }) }
                </div>

                <a href="#privacy-policy" class="footer-privacy">{"Privacy Policy"}</a>
            </div>
        </footer>
    }
}
