//! Rendering and delivery of outbound product email.
use crate::{
    constants::{api, resend as constants},
    upstream::{
        errors::UpstreamError,
        resend::{self, OutboundEmail, SentEmail},
    },
    utils::email::EmailAddress,
};

/// Send the onboarding email containing the new account's credentials.
pub async fn send_welcome(
    mailer: &resend::Client,
    to: &EmailAddress,
    display_name: &str,
    temp_password: &str,
) -> Result<SentEmail, UpstreamError> {
    mailer
        .send(&OutboundEmail {
            from: constants::ONBOARDING_FROM.to_owned(),
            to: to.as_str().to_owned(),
            reply_to: None,
            subject: "Welcome to YT Rewards - Your Account is Ready! \u{1f389}".to_owned(),
            html: render_welcome(display_name, to, temp_password, &api::APP_URL),
        })
        .await
}

/// Forward a support request to the configured support inbox, with replies
/// directed back at the requester.
pub async fn send_support_request(
    mailer: &resend::Client,
    name: &str,
    email: &EmailAddress,
    subject: &str,
    message: &str,
) -> Result<SentEmail, UpstreamError> {
    mailer
        .send(&OutboundEmail {
            from: constants::SUPPORT_FROM.to_owned(),
            to: constants::SUPPORT_EMAIL.clone(),
            reply_to: Some(email.as_str().to_owned()),
            subject: format!("Support Request: {subject}"),
            html: render_support_request(name, email, subject, message),
        })
        .await
}

fn render_welcome(
    display_name: &str,
    email: &EmailAddress,
    temp_password: &str,
    app_url: &str,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Welcome to YT Rewards</title>
  </head>
  <body style="margin: 0; padding: 0; background-color: #f5f5f5; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;">
    <table width="600" cellpadding="0" cellspacing="0" align="center" style="background-color: #ffffff; border-radius: 8px;">
      <tr>
        <td style="background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); padding: 40px; text-align: center; border-radius: 8px 8px 0 0;">
          <h1 style="color: #ffffff; margin: 0; font-size: 32px;">&#127916; Welcome to YT Rewards!</h1>
          <p style="color: #e0e0ff; margin: 10px 0 0; font-size: 16px;">Your account has been created successfully</p>
        </td>
      </tr>
      <tr>
        <td style="padding: 40px;">
          <p style="color: #333333; font-size: 16px;">Hi {display_name}! &#128075;</p>
          <p style="color: #333333; font-size: 16px;">Thank you for joining YT Rewards! Your account is ready, and you can start earning rewards by watching and reviewing videos.</p>
          <div style="background-color: #f8f9fa; border-left: 4px solid #667eea; padding: 20px; border-radius: 4px;">
            <h2 style="color: #667eea; margin: 0 0 15px; font-size: 18px;">&#128272; Your Login Credentials</h2>
            <p style="color: #666666; font-size: 14px;"><strong style="color: #333333;">Email:</strong><br>
              <span style="font-family: 'Courier New', monospace;">{email}</span></p>
            <p style="color: #666666; font-size: 14px;"><strong style="color: #333333;">Temporary Password:</strong><br>
              <span style="font-family: 'Courier New', monospace; font-weight: bold; color: #667eea;">{temp_password}</span></p>
          </div>
          <div style="background-color: #fff3cd; border-left: 4px solid #ffc107; padding: 15px; margin: 30px 0; border-radius: 4px;">
            <p style="color: #856404; margin: 0; font-size: 14px;"><strong>&#9888;&#65039; Important:</strong> For security reasons, you'll be prompted to change your password when you first log in. Please choose a strong password that you haven't used elsewhere.</p>
          </div>
          <div style="text-align: center; margin: 0 0 30px;">
            <a href="{app_url}" style="display: inline-block; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: #ffffff; text-decoration: none; padding: 16px 40px; border-radius: 6px; font-weight: 600;">Access Your Account &#8594;</a>
          </div>
          <div style="background-color: #f8f9fa; padding: 20px; border-radius: 4px;">
            <h3 style="color: #333333; margin: 0 0 15px; font-size: 16px;">&#128161; How YT Rewards Works</h3>
            <ul style="color: #666666; margin: 0; padding-left: 20px; font-size: 14px;">
              <li>Watch 5 videos daily and rate them</li>
              <li>Earn $5 per video ($25/day when you complete all 5)</li>
              <li>Build your balance towards your withdrawal goal</li>
              <li>Withdraw when you reach $1,000</li>
            </ul>
          </div>
          <p style="color: #666666; font-size: 14px;">If you have any questions or need help, visit our <a href="{app_url}/support" style="color: #667eea;">support page</a> or reply to this email.</p>
        </td>
      </tr>
      <tr>
        <td style="background-color: #f8f9fa; padding: 30px; text-align: center; border-radius: 0 0 8px 8px;">
          <p style="color: #999999; margin: 0 0 10px; font-size: 14px;">YT Rewards - Earn rewards by watching videos</p>
          <p style="color: #999999; margin: 0; font-size: 12px;"><a href="{app_url}" style="color: #667eea;">{app_url}</a></p>
        </td>
      </tr>
    </table>
  </body>
</html>"#
    )
}

fn render_support_request(
    name: &str,
    email: &EmailAddress,
    subject: &str,
    message: &str,
) -> String {
    let message_html = message.replace('\n', "<br />");
    format!(
        "<h2>New Support Request from YT Rewards</h2>\n\
         <p><strong>From:</strong> {name}</p>\n\
         <p><strong>Email:</strong> {email}</p>\n\
         <p><strong>Subject:</strong> {subject}</p>\n\
         <hr />\n\
         <h3>Message:</h3>\n\
         <p>{message_html}</p>"
    )
}
